//! Vaccine catalogue and the signed-in person's identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Vaccines with a dedicated information page.
///
/// The `strum` serialization is the URL slug (`/vaccines/{slug}`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum VaccineType {
    #[strum(serialize = "rsv")]
    #[serde(rename = "rsv")]
    Rsv,
    #[strum(serialize = "rsv-pregnancy")]
    #[serde(rename = "rsv-pregnancy")]
    RsvPregnancy,
    #[strum(serialize = "td-ipv-3-in-1")]
    #[serde(rename = "td-ipv-3-in-1")]
    TdIpv3In1,
}

/// The casings a vaccine name appears in across a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayName {
    pub title_case: &'static str,
    pub mid_sentence_case: &'static str,
}

/// Static per-vaccine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccineDetails {
    pub display_name: DisplayName,
    /// External page on the NHS website, used whenever content cannot be loaded.
    pub nhs_webpage_link: &'static str,
    /// Whether the page asks the eligibility service for a personal verdict.
    pub personalised_eligibility_status_required: bool,
    /// Document path on the content service.
    pub content_path: &'static str,
    /// Condition code used by the eligibility service, if it knows this vaccine.
    pub eligibility_condition: Option<&'static str>,
}

const RSV: VaccineDetails = VaccineDetails {
    display_name: DisplayName {
        title_case: "RSV",
        mid_sentence_case: "RSV",
    },
    nhs_webpage_link: "https://www.nhs.uk/vaccinations/rsv-vaccine/",
    personalised_eligibility_status_required: true,
    content_path: "vaccinations/rsv-vaccine",
    eligibility_condition: Some("RSV"),
};

const RSV_PREGNANCY: VaccineDetails = VaccineDetails {
    display_name: DisplayName {
        title_case: "RSV vaccine in pregnancy",
        mid_sentence_case: "RSV",
    },
    nhs_webpage_link: "https://www.nhs.uk/pregnancy/keeping-well/rsv-vaccine/",
    personalised_eligibility_status_required: false,
    content_path: "vaccinations/rsv-vaccine",
    eligibility_condition: None,
};

const TD_IPV_3_IN_1: VaccineDetails = VaccineDetails {
    display_name: DisplayName {
        title_case: "Td/IPV (3-in-1 teenage booster)",
        mid_sentence_case: "Td/IPV (3-in-1 teenage booster)",
    },
    nhs_webpage_link: "https://www.nhs.uk/vaccinations/td-ipv-vaccine-3-in-1-teenage-booster/",
    personalised_eligibility_status_required: false,
    content_path: "vaccinations/td-ipv-vaccine-3-in-1-teenage-booster",
    eligibility_condition: None,
};

impl VaccineType {
    #[must_use]
    pub const fn details(self) -> &'static VaccineDetails {
        match self {
            Self::Rsv => &RSV,
            Self::RsvPregnancy => &RSV_PREGNANCY,
            Self::TdIpv3In1 => &TD_IPV_3_IN_1,
        }
    }

    /// URL slug of the vaccine page.
    #[must_use]
    pub fn slug(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for VaccineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A national health identifier: exactly ten ASCII digits.
///
/// `Debug` is redacted so the number never ends up in logs by accident.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NhsNumber(String);

impl NhsNumber {
    pub const LEN: usize = 10;

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NhsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NhsNumber(**********)")
    }
}

/// Rejected NHS number input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("NHS number must be exactly {} digits", NhsNumber::LEN)]
pub struct InvalidNhsNumber;

impl FromStr for NhsNumber {
    type Err = InvalidNhsNumber;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.len() == Self::LEN && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(digits))
        } else {
            Err(InvalidNhsNumber)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for vaccine in VaccineType::iter() {
            assert_eq!(vaccine.slug().parse::<VaccineType>(), Ok(vaccine));
        }
        assert!("flu".parse::<VaccineType>().is_err());
    }

    #[test]
    fn only_rsv_requires_personalised_eligibility() {
        let personalised: Vec<_> = VaccineType::iter()
            .filter(|v| v.details().personalised_eligibility_status_required)
            .collect();
        assert_eq!(personalised, vec![VaccineType::Rsv]);
    }

    #[test]
    fn nhs_number_accepts_spaced_digits() {
        let number: NhsNumber = "512 345 6789".parse().unwrap();
        assert_eq!(number.as_str(), "5123456789");
    }

    #[test]
    fn nhs_number_rejects_bad_input() {
        assert_eq!("123".parse::<NhsNumber>(), Err(InvalidNhsNumber));
        assert_eq!("51234567890".parse::<NhsNumber>(), Err(InvalidNhsNumber));
        assert_eq!("51234x6789".parse::<NhsNumber>(), Err(InvalidNhsNumber));
        assert_eq!(InvalidNhsNumber.to_string(), "NHS number must be exactly 10 digits");
    }

    #[test]
    fn nhs_number_debug_is_redacted() {
        let number: NhsNumber = "5123456789".parse().unwrap();
        assert!(!format!("{number:?}").contains("5123456789"));
    }
}
