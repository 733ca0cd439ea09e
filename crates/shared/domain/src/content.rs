//! Content service results as the page composer sees them.

use serde::{Deserialize, Serialize};

/// Failure tag for a content lookup. The cause is logged by the content slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentError {
    #[error("content could not be loaded")]
    ContentLoadingError,
}

/// One titled block of pre-rendered content.
///
/// `markup` is HTML that came from the content service and is emitted unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSection {
    pub heading: String,
    pub markup: String,
}

/// Informational content for one vaccine, ready to be placed on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledVaccineContent {
    pub overview: String,
    pub what_vaccine_is_for: Option<StyledSection>,
    pub who_vaccine_is_for: Option<StyledSection>,
    pub how_to_get_vaccine: StyledSection,
    pub vaccine_side_effects: Option<StyledSection>,
    pub web_link: Option<String>,
}

/// Outcome of a content lookup; styled content and its error are mutually exclusive.
pub type ContentResult = Result<StyledVaccineContent, ContentError>;
