//! Reduces a `patient-check` response to the verdict for one condition.

use crate::markdown::{is_safe_destination, render_markdown};
use crate::response::{PatientCheck, ProcessedSuggestion, SuggestedAction};
use crate::response::SuitabilityRule as RawRule;
use tracing::debug;
use vacc_domain::eligibility::{
    Action, ActionButton, ActionKind, Eligibility, EligibilityContent, EligibilityStatus, RuleKind,
    SuitabilityRule, Summary,
};

const INTRODUCTION_NOT_ELIGIBLE: &str = "This is because you:";
const INTRODUCTION_DEFAULT: &str = "This is because you're:";

fn parse_status(raw: &str) -> Option<EligibilityStatus> {
    match raw {
        "NotEligible" => Some(EligibilityStatus::NotEligible),
        "NotActionable" => Some(EligibilityStatus::NotActionable),
        "Actionable" => Some(EligibilityStatus::Actionable),
        _ => None,
    }
}

fn parse_action_kind(raw: &str) -> Option<ActionKind> {
    match raw {
        "InfoText" => Some(ActionKind::InfoText),
        "CardWithText" => Some(ActionKind::CardWithText),
        "ButtonWithAuthLink" => Some(ActionKind::ButtonWithAuthLink),
        _ => None,
    }
}

fn parse_rule_kind(raw: &str) -> Option<RuleKind> {
    match raw {
        "S" => Some(RuleKind::Suppression),
        "F" => Some(RuleKind::Filter),
        "R" => Some(RuleKind::Redirect),
        _ => None,
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_owned)
}

fn summary(suggestion: &ProcessedSuggestion, status: Option<EligibilityStatus>) -> Option<Summary> {
    let cohorts: Vec<String> = suggestion
        .eligibility_cohorts
        .iter()
        .map(|cohort| cohort.cohort_text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .collect();
    let heading = suggestion.status_text.trim();

    if heading.is_empty() && cohorts.is_empty() {
        return None;
    }

    let introduction = match status {
        Some(EligibilityStatus::NotEligible) => INTRODUCTION_NOT_ELIGIBLE,
        _ => INTRODUCTION_DEFAULT,
    };

    Some(Summary::builder().heading(heading).introduction(introduction).cohorts(cohorts).build())
}

fn action(raw: &SuggestedAction) -> Option<Action> {
    let Some(kind) = parse_action_kind(&raw.action_type) else {
        debug!(action_type = %raw.action_type, "Skipping unknown action type");
        return None;
    };

    let button = match (non_blank(raw.url_label.as_ref()), non_blank(raw.url_link.as_ref())) {
        (Some(label), Some(url)) if is_safe_destination(&url) => Some(ActionButton { label, url }),
        (Some(_), Some(_)) => {
            debug!(action_type = %raw.action_type, "Dropping action button with unsafe link");
            None
        },
        _ => None,
    };

    Some(Action { kind, markup: render_markdown(&raw.description), button })
}

fn suitability_rule(raw: &RawRule) -> Option<SuitabilityRule> {
    let Some(kind) = parse_rule_kind(&raw.rule_type) else {
        debug!(rule_type = %raw.rule_type, "Skipping unknown suitability rule type");
        return None;
    };
    Some(SuitabilityRule { kind, markup: render_markdown(&raw.rule_text) })
}

/// Picks the suggestion for `condition` and maps it into the page's [`Eligibility`].
///
/// A response without that condition yields an empty verdict (no status, no content),
/// which the page treats as "nothing to show" rather than as a failure.
pub(crate) fn filter_for_condition(check: &PatientCheck, condition: &str) -> Eligibility {
    let Some(suggestion) =
        check.processed_suggestions.iter().find(|s| s.condition.eq_ignore_ascii_case(condition))
    else {
        debug!(condition, "No suggestion for condition in patient check");
        return Eligibility::default();
    };

    let status = parse_status(&suggestion.status);
    if status.is_none() {
        debug!(condition, status = %suggestion.status, "Unrecognised eligibility status");
    }

    let content = EligibilityContent {
        summary: summary(suggestion, status),
        actions: suggestion.actions.iter().filter_map(action).collect(),
        suitability_rules: suggestion.suitability_rules.iter().filter_map(suitability_rule).collect(),
    };

    Eligibility { status, content: Some(content) }
}
