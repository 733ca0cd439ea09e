//! Personalised eligibility verdicts.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EligibilityStatus {
    NotEligible,
    NotActionable,
    Actionable,
}

/// Failure tag for an eligibility lookup (missing session or upstream failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityError {
    #[error("eligibility could not be loaded")]
    EligibilityLoadingError,
}

/// Heading, lead-in sentence and the cohorts that explain the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct Summary {
    #[builder(setter(into))]
    pub heading: String,
    #[builder(setter(into))]
    pub introduction: String,
    #[builder(default)]
    pub cohorts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    InfoText,
    CardWithText,
    ButtonWithAuthLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    pub url: String,
}

/// Something the person can do next. `markup` is HTML rendered from the service's markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub markup: String,
    pub button: Option<ActionButton>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Suppression,
    Filter,
    Redirect,
}

/// A reason the vaccine may not suit the person right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityRule {
    pub kind: RuleKind,
    pub markup: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct EligibilityContent {
    #[builder(default, setter(strip_option))]
    pub summary: Option<Summary>,
    #[builder(default)]
    pub actions: Vec<Action>,
    #[builder(default)]
    pub suitability_rules: Vec<SuitabilityRule>,
}

/// A verdict as returned by the eligibility service. Either half may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub status: Option<EligibilityStatus>,
    pub content: Option<EligibilityContent>,
}

/// Outcome of an eligibility lookup; a verdict and its error are mutually exclusive.
pub type EligibilityResult = Result<Eligibility, EligibilityError>;
