//! Eligibility feature slice: asks the eligibility service whether the signed-in person
//! should have a vaccine and turns the answer into page-ready content.
//!
//! Markdown from the service is rendered here, so the page templates only ever see HTML.

mod error;
mod filter;
mod markdown;
mod response;
mod source;

pub use crate::error::{EligibilityClientError, EligibilityClientErrorExt};
pub use crate::source::{EligibilitySource, HttpEligibilitySource};

use std::sync::Arc;
use vacc_kernel::domain::config::ApiConfig;
use vacc_kernel::domain::registry::InitializedSlice;
use vacc_kernel::upstream::UpstreamClient;

/// Eligibility feature state
#[vacc_derive::vacc_slice]
pub struct EligibilityService {
    source: Arc<dyn EligibilitySource>,
}

impl EligibilityService {
    #[must_use]
    pub fn from_source(source: Arc<dyn EligibilitySource>) -> Self {
        Self::new(EligibilityServiceInner { source })
    }

    #[must_use]
    pub fn source(&self) -> Arc<dyn EligibilitySource> {
        Arc::clone(&self.inner.source)
    }
}

/// Initialize the eligibility feature against the configured eligibility service.
///
/// # Errors
/// Returns [`EligibilityClientError::Upstream`] if the `[eligibility]` settings cannot
/// produce an HTTP client.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, EligibilityClientError> {
    let client = UpstreamClient::new(&config.eligibility).context("eligibility service")?;
    tracing::info!(base_url = %client.base_url(), "Eligibility slice initialized");

    let slice = EligibilityService::from_source(Arc::new(HttpEligibilitySource::new(client)));

    Ok(InitializedSlice::new(slice))
}
