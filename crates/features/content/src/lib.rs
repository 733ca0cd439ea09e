//! Content feature slice: informational sections for each vaccine page, fetched from
//! the content service and styled into [`StyledVaccineContent`](vacc_domain::content::StyledVaccineContent).

mod document;
mod error;
mod source;
mod styling;

pub use crate::error::{ContentClientError, ContentClientErrorExt};
pub use crate::source::{ContentSource, HttpContentSource};

use std::sync::Arc;
use vacc_kernel::domain::config::ApiConfig;
use vacc_kernel::domain::registry::InitializedSlice;
use vacc_kernel::upstream::UpstreamClient;

/// Content feature state
#[vacc_derive::vacc_slice]
pub struct Content {
    source: Arc<dyn ContentSource>,
}

impl Content {
    /// Wraps any [`ContentSource`]; tests and alternative backends plug in here.
    #[must_use]
    pub fn from_source(source: Arc<dyn ContentSource>) -> Self {
        Self::new(ContentInner { source })
    }

    #[must_use]
    pub fn source(&self) -> Arc<dyn ContentSource> {
        Arc::clone(&self.inner.source)
    }
}

/// Initialize the content feature against the configured content service.
///
/// # Errors
/// Returns [`ContentClientError::Upstream`] if the `[content]` settings cannot produce
/// an HTTP client (bad base URL or API key).
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, ContentClientError> {
    let client = UpstreamClient::new(&config.content).context("content service")?;
    tracing::info!(base_url = %client.base_url(), "Content slice initialized");

    let slice = Content::from_source(Arc::new(HttpContentSource::new(client)));

    Ok(InitializedSlice::new(slice))
}
