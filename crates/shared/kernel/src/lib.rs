//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for IDs, config loading,
//! and (with the `server` feature) the Axum state, session extractor and system routes.
//! The `upstream` feature adds the JSON client the service slices use.
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs (request correlation, trace spans):
//! ```rust
//! # use vacc_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use vacc_kernel::config::load_config;
//! let cfg: vacc_kernel::domain::config::ApiConfig = load_config(Some("server"))?;
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "upstream")]
pub mod upstream;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use nanoid::nanoid;
pub use vacc_domain as domain;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
