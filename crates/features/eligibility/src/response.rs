//! Wire shape of a `patient-check` response.
//!
//! Enumerated fields stay as strings here; unknown values are dropped by the filter
//! instead of failing the whole response.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PatientCheck {
    #[serde(default)]
    pub processed_suggestions: Vec<ProcessedSuggestion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ProcessedSuggestion {
    pub condition: String,
    pub status: String,
    pub status_text: String,
    pub eligibility_cohorts: Vec<EligibilityCohort>,
    pub actions: Vec<SuggestedAction>,
    pub suitability_rules: Vec<SuitabilityRule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct EligibilityCohort {
    pub cohort_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SuggestedAction {
    pub action_type: String,
    pub description: String,
    pub url_link: Option<String>,
    pub url_label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SuitabilityRule {
    pub rule_type: String,
    pub rule_text: String,
}
