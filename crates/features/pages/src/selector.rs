use crate::model::{EligibilityFallback, EligibilityPanel, EligibilitySection, HowToGet};
use vacc_domain::eligibility::{Eligibility, EligibilityResult};
use vacc_domain::vaccine::VaccineType;

/// Decides what the eligibility part of a page shows.
///
/// * RSV with a complete verdict (status and content) gets the personalised panel.
/// * RSV whose verdict failed to load gets generic copy plus `how_to_get`.
/// * Anything else, including an incomplete verdict, shows nothing.
#[must_use]
pub fn select_eligibility_section(
    vaccine: VaccineType,
    eligibility: Option<&EligibilityResult>,
    how_to_get: HowToGet,
) -> Option<EligibilitySection> {
    if vaccine != VaccineType::Rsv {
        return None;
    }

    match eligibility? {
        Ok(Eligibility { status: Some(status), content: Some(content) }) => {
            Some(EligibilitySection::Panel(EligibilityPanel {
                status: *status,
                content: content.clone(),
            }))
        },
        Ok(_) => None,
        Err(_) => Some(EligibilitySection::Fallback(EligibilityFallback { vaccine, how_to_get })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vacc_domain::content::StyledSection;
    use vacc_domain::eligibility::{
        EligibilityContent, EligibilityError, EligibilityStatus, Summary,
    };

    fn content_how_to_get() -> HowToGet {
        HowToGet::Content(StyledSection {
            heading: "How to get it".to_owned(),
            markup: "<p>Ask your GP.</p>".to_owned(),
        })
    }

    fn verdict() -> EligibilityResult {
        Ok(Eligibility {
            status: Some(EligibilityStatus::Actionable),
            content: Some(
                EligibilityContent::builder()
                    .summary(
                        Summary::builder()
                            .heading("You should have the RSV vaccine")
                            .introduction("This is because you're:")
                            .build(),
                    )
                    .build(),
            ),
        })
    }

    #[test]
    fn complete_verdict_selects_panel() {
        let section =
            select_eligibility_section(VaccineType::Rsv, Some(&verdict()), content_how_to_get());

        let Some(EligibilitySection::Panel(panel)) = section else {
            panic!("expected the eligibility panel, got {section:?}");
        };
        assert_eq!(panel.status, EligibilityStatus::Actionable);
        assert_eq!(panel.status_label(), "actionable");
    }

    #[test]
    fn error_selects_fallback_carrying_how_to_get() {
        let failed: EligibilityResult = Err(EligibilityError::EligibilityLoadingError);

        let section =
            select_eligibility_section(VaccineType::Rsv, Some(&failed), content_how_to_get());

        assert_eq!(
            section,
            Some(EligibilitySection::Fallback(EligibilityFallback {
                vaccine: VaccineType::Rsv,
                how_to_get: content_how_to_get(),
            }))
        );
    }

    #[test]
    fn incomplete_verdict_selects_nothing() {
        let no_status: EligibilityResult =
            Ok(Eligibility { status: None, content: Some(EligibilityContent::default()) });
        let no_content: EligibilityResult =
            Ok(Eligibility { status: Some(EligibilityStatus::NotEligible), content: None });

        for outcome in [no_status, no_content, Ok(Eligibility::default())] {
            let how_to_get = HowToGet::Fallback(VaccineType::Rsv);
            assert_eq!(select_eligibility_section(VaccineType::Rsv, Some(&outcome), how_to_get), None);
        }
    }

    #[test]
    fn missing_outcome_selects_nothing() {
        let how_to_get = HowToGet::Fallback(VaccineType::Rsv);
        assert_eq!(select_eligibility_section(VaccineType::Rsv, None, how_to_get), None);
    }

    #[test]
    fn other_vaccines_never_get_a_section() {
        let failed: EligibilityResult = Err(EligibilityError::EligibilityLoadingError);

        for vaccine in [VaccineType::RsvPregnancy, VaccineType::TdIpv3In1] {
            let how_to_get = HowToGet::Fallback(vaccine);
            assert_eq!(select_eligibility_section(vaccine, Some(&verdict()), how_to_get.clone()), None);
            assert_eq!(select_eligibility_section(vaccine, Some(&failed), how_to_get), None);
        }
    }
}
