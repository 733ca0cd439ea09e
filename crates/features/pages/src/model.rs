//! The page as data. Everything a template needs is decided here; templates only lay it out.

use crate::fallback;
use vacc_domain::content::StyledSection;
use vacc_domain::eligibility::{EligibilityContent, EligibilityStatus};
use vacc_domain::vaccine::VaccineType;

/// The "how to get the vaccine" block: the content service's section or static fallback copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HowToGet {
    Content(StyledSection),
    Fallback(VaccineType),
}

impl HowToGet {
    #[must_use]
    pub fn heading(&self) -> &str {
        match self {
            Self::Content(section) if !section.heading.is_empty() => &section.heading,
            Self::Content(_) | Self::Fallback(_) => fallback::HOW_TO_GET_HEADING,
        }
    }

    /// Trusted HTML.
    #[must_use]
    pub fn markup(&self) -> &str {
        match self {
            Self::Content(section) => &section.markup,
            Self::Fallback(vaccine) => fallback::how_to_get_markup(*vaccine),
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// A personalised verdict with everything needed to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityPanel {
    pub status: EligibilityStatus,
    pub content: EligibilityContent,
}

impl EligibilityPanel {
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        match self.status {
            EligibilityStatus::NotEligible => "not-eligible",
            EligibilityStatus::NotActionable => "not-actionable",
            EligibilityStatus::Actionable => "actionable",
        }
    }
}

/// Generic eligibility copy shown when the verdict could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityFallback {
    pub vaccine: VaccineType,
    pub how_to_get: HowToGet,
}

impl EligibilityFallback {
    #[must_use]
    pub const fn eligibility_markup(&self) -> &'static str {
        fallback::eligibility_markup(self.vaccine)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilitySection {
    Panel(EligibilityPanel),
    Fallback(EligibilityFallback),
}

/// Static "who should have it" copy for RSV in pregnancy, followed by how to get it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PregnancyPanel {
    pub how_to_get: HowToGet,
}

impl PregnancyPanel {
    #[must_use]
    pub const fn eligibility_markup(&self) -> &'static str {
        fallback::RSV_PREGNANCY_ELIGIBILITY
    }
}

/// Expandable sections taken from the content service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichInformation {
    pub sections: Vec<StyledSection>,
    pub web_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoreInformation {
    Rich(RichInformation),
    /// Content could not be loaded; link out to the NHS website instead.
    FindOutMore(&'static str),
}

/// Composed vaccine page, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccinePage {
    pub vaccine: VaccineType,
    pub title: &'static str,
    pub overview: Option<String>,
    pub eligibility: Option<EligibilitySection>,
    pub pregnancy_panel: Option<PregnancyPanel>,
    pub divider: bool,
    pub more_information_heading: String,
    pub more_information: MoreInformation,
}

impl VaccinePage {
    #[must_use]
    pub const fn shows_find_out_more(&self) -> bool {
        matches!(self.more_information, MoreInformation::FindOutMore(_))
    }

    #[must_use]
    pub const fn mid_sentence_name(&self) -> &'static str {
        self.vaccine.details().display_name.mid_sentence_case
    }
}
