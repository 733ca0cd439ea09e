use crate::model::{
    HowToGet, MoreInformation, PregnancyPanel, RichInformation, VaccinePage,
};
use crate::selector::select_eligibility_section;
use std::time::Instant;
use tracing::debug;
use vacc_content::ContentSource;
use vacc_domain::content::ContentResult;
use vacc_domain::eligibility::{EligibilityError, EligibilityResult};
use vacc_domain::vaccine::{NhsNumber, VaccineType};
use vacc_eligibility::EligibilitySource;

/// Fetches what a vaccine page needs and decides what it shows.
///
/// Content and (for vaccines with personalised eligibility) the eligibility verdict are
/// requested concurrently. Without an NHS number the eligibility lookup is skipped and
/// treated as failed, so signed-out visitors see the fallback panel. Never fails: every
/// upstream problem is already a value by the time it gets here.
pub async fn compose_vaccine_page(
    vaccine: VaccineType,
    nhs_number: Option<&NhsNumber>,
    content_source: &dyn ContentSource,
    eligibility_source: &dyn EligibilitySource,
) -> VaccinePage {
    let started = Instant::now();

    let (content, eligibility) = if vaccine.details().personalised_eligibility_status_required {
        let eligibility_lookup = async {
            match nhs_number {
                Some(nhs_number) => eligibility_source.eligibility_for_person(vaccine, nhs_number).await,
                None => {
                    debug!(%vaccine, "No session, skipping eligibility lookup");
                    Err(EligibilityError::EligibilityLoadingError)
                },
            }
        };
        let (content, eligibility) =
            tokio::join!(content_source.content_for_vaccine(vaccine), eligibility_lookup);
        (content, Some(eligibility))
    } else {
        (content_source.content_for_vaccine(vaccine).await, None)
    };

    let page = assemble_page(vaccine, content, eligibility);

    debug!(
        %vaccine,
        elapsed_ms = started.elapsed().as_millis(),
        content = !page.shows_find_out_more(),
        "Vaccine page composed"
    );
    page
}

/// Builds the page from already-fetched outcomes. `eligibility` is `None` when no
/// lookup was attempted.
#[must_use]
pub fn assemble_page(
    vaccine: VaccineType,
    content: ContentResult,
    eligibility: Option<EligibilityResult>,
) -> VaccinePage {
    let details = vaccine.details();
    let personalised = details.personalised_eligibility_status_required;

    let how_to_get = content
        .as_ref()
        .map_or(HowToGet::Fallback(vaccine), |c| HowToGet::Content(c.how_to_get_vaccine.clone()));

    let eligibility_section = if vaccine == VaccineType::Rsv {
        select_eligibility_section(vaccine, eligibility.as_ref(), how_to_get.clone())
    } else {
        None
    };

    let pregnancy_panel =
        (vaccine == VaccineType::RsvPregnancy).then(|| PregnancyPanel { how_to_get });

    let (overview, more_information) = match content {
        Ok(content) => {
            // Personalised pages already explain who the vaccine is for.
            let who_is_for = content.who_vaccine_is_for.filter(|_| !personalised);
            let sections = [
                content.what_vaccine_is_for,
                who_is_for,
                Some(content.how_to_get_vaccine),
                content.vaccine_side_effects,
            ]
            .into_iter()
            .flatten()
            .collect();
            (
                Some(content.overview),
                MoreInformation::Rich(RichInformation { sections, web_link: content.web_link }),
            )
        },
        Err(_) => (None, MoreInformation::FindOutMore(details.nhs_webpage_link)),
    };

    VaccinePage {
        vaccine,
        title: details.display_name.title_case,
        overview,
        eligibility: eligibility_section,
        pregnancy_panel,
        divider: !personalised,
        more_information_heading: format!(
            "More information about the {} vaccine",
            details.display_name.mid_sentence_case
        ),
        more_information,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EligibilitySection;
    use vacc_domain::content::{ContentError, StyledSection, StyledVaccineContent};

    fn section(heading: &str) -> StyledSection {
        StyledSection { heading: heading.to_owned(), markup: format!("<p>{heading}</p>") }
    }

    fn content() -> ContentResult {
        Ok(StyledVaccineContent {
            overview: "Overview".to_owned(),
            what_vaccine_is_for: Some(section("What")),
            who_vaccine_is_for: Some(section("Who")),
            how_to_get_vaccine: section("How"),
            vaccine_side_effects: Some(section("Side effects")),
            web_link: None,
        })
    }

    fn headings(page: &VaccinePage) -> Vec<&str> {
        match &page.more_information {
            MoreInformation::Rich(info) => info.sections.iter().map(|s| s.heading.as_str()).collect(),
            MoreInformation::FindOutMore(_) => Vec::new(),
        }
    }

    #[test]
    fn rsv_page_hides_who_is_for_section() {
        let page = assemble_page(VaccineType::Rsv, content(), Some(Ok(Default::default())));
        assert_eq!(headings(&page), vec!["What", "How", "Side effects"]);
    }

    #[test]
    fn td_ipv_page_keeps_every_section() {
        let page = assemble_page(VaccineType::TdIpv3In1, content(), None);
        assert_eq!(headings(&page), vec!["What", "Who", "How", "Side effects"]);
        assert_eq!(page.title, "Td/IPV (3-in-1 teenage booster)");
    }

    #[test]
    fn heading_uses_mid_sentence_name() {
        let page = assemble_page(VaccineType::RsvPregnancy, content(), None);
        assert_eq!(page.more_information_heading, "More information about the RSV vaccine");
    }

    #[test]
    fn pregnancy_panel_falls_back_without_content() {
        let page =
            assemble_page(VaccineType::RsvPregnancy, Err(ContentError::ContentLoadingError), None);

        let panel = page.pregnancy_panel.expect("pregnancy panel");
        assert_eq!(panel.how_to_get, HowToGet::Fallback(VaccineType::RsvPregnancy));
        assert!(page.eligibility.is_none());
    }

    #[test]
    fn rsv_fallback_panel_prefers_content_how_to_get() {
        let page = assemble_page(
            VaccineType::Rsv,
            content(),
            Some(Err(EligibilityError::EligibilityLoadingError)),
        );

        let Some(EligibilitySection::Fallback(fallback)) = page.eligibility else {
            panic!("expected fallback panel");
        };
        assert_eq!(fallback.how_to_get, HowToGet::Content(section("How")));
    }
}
