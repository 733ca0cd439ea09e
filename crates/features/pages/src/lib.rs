//! Vaccine pages: composes each vaccine's page from the content and eligibility slices
//! and renders it to HTML.
//!
//! Composition is split in two pure decisions:
//! * [`compose_vaccine_page`] fetches what the vaccine needs (concurrently where both
//!   services are involved) and lays out the sections.
//! * [`select_eligibility_section`] picks the personalised panel, the fallback panel or
//!   nothing.
//!
//! The result is a [`VaccinePage`] view model; [`render_vaccine_page`] turns it into HTML.
//! With the `server` feature, [`pages_router`] serves it over Axum.

mod composer;
mod error;
mod fallback;
mod model;
mod render;
#[cfg(feature = "server")]
mod router;
mod selector;

pub use crate::composer::{assemble_page, compose_vaccine_page};
pub use crate::error::{PageError, PageErrorExt};
pub use crate::model::{
    EligibilityFallback, EligibilityPanel, EligibilitySection, HowToGet, MoreInformation,
    PregnancyPanel, RichInformation, VaccinePage,
};
pub use crate::render::{
    IndexEntry, index_entries, render_index, render_not_found, render_vaccine_page,
};
#[cfg(feature = "server")]
pub use crate::router::{not_found, pages_router};
pub use crate::selector::select_eligibility_section;
