use crate::document::ContentDocument;
use crate::error::{ContentClientError, ContentClientErrorExt};
use crate::styling::style_content;
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::{debug, warn};
use vacc_domain::content::{ContentError, ContentResult, StyledVaccineContent};
use vacc_domain::vaccine::VaccineType;
use vacc_kernel::upstream::UpstreamClient;

/// Where vaccine information comes from.
///
/// Implementations never fail loudly: whatever goes wrong is logged and surfaces as
/// [`ContentError::ContentLoadingError`].
#[async_trait]
pub trait ContentSource: Send + Sync + Debug {
    async fn content_for_vaccine(&self, vaccine: VaccineType) -> ContentResult;
}

/// [`ContentSource`] backed by the content service.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: UpstreamClient,
}

impl HttpContentSource {
    #[must_use]
    pub const fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, vaccine: VaccineType) -> Result<StyledVaccineContent, ContentClientError> {
        let path = vaccine.details().content_path;
        let url = self.client.endpoint(path.split('/')).context(path)?;
        debug!(%vaccine, %url, "Fetching vaccine content");

        let document: ContentDocument =
            self.client.get_json(url).await.context(format!("GET {path}"))?;
        style_content(&document).context(path)
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn content_for_vaccine(&self, vaccine: VaccineType) -> ContentResult {
        self.fetch(vaccine).await.map_err(|e| {
            warn!(%vaccine, kind = e.kind(), "Vaccine content unavailable: {e}");
            ContentError::ContentLoadingError
        })
    }
}
