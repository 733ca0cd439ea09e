//! Turns a raw content document into the sections a vaccine page places.

use crate::document::{ContentDocument, ContentEntity};
use crate::error::ContentClientError;
use vacc_domain::content::{StyledSection, StyledVaccineContent};

pub(crate) const WHAT_VACCINE_IS_FOR: &str = "what-vaccine-is-for";
pub(crate) const WHO_VACCINE_IS_FOR: &str = "who-vaccine-is-for";
pub(crate) const HOW_TO_GET_VACCINE: &str = "how-to-get-vaccine";
pub(crate) const VACCINE_SIDE_EFFECTS: &str = "vaccine-side-effects";

fn style_section(entity: &ContentEntity) -> StyledSection {
    let markup = entity.has_part.iter().map(|part| part.text.trim()).collect::<Vec<_>>().join("\n");
    StyledSection { heading: entity.headline.trim().to_owned(), markup }
}

/// # Errors
/// Returns [`ContentClientError::MissingSection`] when the document has no
/// how-to-get section, the only one a page cannot do without.
pub(crate) fn style_content(
    document: &ContentDocument,
) -> Result<StyledVaccineContent, ContentClientError> {
    let section = |identifier: &str| document.entity(identifier).map(style_section);

    let how_to_get_vaccine =
        section(HOW_TO_GET_VACCINE).ok_or_else(|| ContentClientError::MissingSection {
            message: HOW_TO_GET_VACCINE.into(),
            context: None,
        })?;

    Ok(StyledVaccineContent {
        overview: document.description.trim().to_owned(),
        what_vaccine_is_for: section(WHAT_VACCINE_IS_FOR),
        who_vaccine_is_for: section(WHO_VACCINE_IS_FOR),
        how_to_get_vaccine,
        vaccine_side_effects: section(VACCINE_SIDE_EFFECTS),
        web_link: document.webpage.clone().filter(|link| !link.trim().is_empty()),
    })
}
