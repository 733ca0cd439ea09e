//! Facade crate for the vaccine pages features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `vacc` with the `server` feature for the HTTP surface.
//! - Call [`init`] to build the feature slices from configuration.

pub use vacc_domain as domain;
use vacc_domain::config::ApiConfig;
use vacc_domain::registry::InitializedSlice;
pub use vacc_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use vacc_kernel::server::router::system_router;
        pub use vacc_pages::{not_found, pages_router};
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use vacc_content as content;
    pub use vacc_eligibility as eligibility;
    pub use vacc_pages as pages;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "content",
        "eligibility",
        "pages",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize the feature slices the pages depend on.
///
/// # Errors
/// Returns an error if any feature initialization fails (e.g., an unusable upstream URL).
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Content service
    slices.push(features::content::init(config)?);

    // Eligibility service
    slices.push(features::eligibility::init(config)?);

    Ok(slices)
}
