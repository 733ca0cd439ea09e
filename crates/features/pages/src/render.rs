//! HTML for the composed pages (askama templates under `templates/`).

use crate::error::{PageError, PageErrorExt};
use crate::model::{EligibilitySection, MoreInformation, VaccinePage};
use askama::Template;
use strum::IntoEnumIterator;
use vacc_domain::eligibility::ActionKind;
use vacc_domain::vaccine::VaccineType;

/// Minimal page used when rendering itself fails.
pub(crate) const SERVER_ERROR_PAGE: &str = "<!DOCTYPE html><html lang=\"en\"><head>\
<title>Sorry, there is a problem with the service - NHS App</title></head><body>\
<h1>Sorry, there is a problem with the service</h1><p>Try again later.</p></body></html>";

#[derive(Template)]
#[template(path = "vaccine.html")]
struct VaccineTemplate<'a> {
    page: &'a VaccinePage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub href: String,
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    entries: Vec<IndexEntry>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    path: &'a str,
}

/// # Errors
/// Returns [`PageError::Render`] if the template fails to render.
pub fn render_vaccine_page(page: &VaccinePage) -> Result<String, PageError> {
    VaccineTemplate { page }.render().context(page.vaccine.slug())
}

/// Links to every vaccine page, in catalogue order.
#[must_use]
pub fn index_entries() -> Vec<IndexEntry> {
    VaccineType::iter()
        .map(|vaccine| IndexEntry {
            href: format!("/vaccines/{}", vaccine.slug()),
            title: vaccine.details().display_name.title_case,
        })
        .collect()
}

/// # Errors
/// Returns [`PageError::Render`] if the template fails to render.
pub fn render_index() -> Result<String, PageError> {
    IndexTemplate { entries: index_entries() }.render().context("index")
}

/// # Errors
/// Returns [`PageError::Render`] if the template fails to render.
pub fn render_not_found(path: &str) -> Result<String, PageError> {
    NotFoundTemplate { path }.render().context("not found")
}
