use crate::composer::compose_vaccine_page;
use crate::error::{PageError, PageErrorExt};
use crate::render::{render_index, render_not_found, render_vaccine_page};
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tracing::{Instrument, info, info_span};
use vacc_content::Content;
use vacc_domain::vaccine::VaccineType;
use vacc_eligibility::EligibilityService;
use vacc_kernel::safe_nanoid;
use vacc_kernel::server::{ApiState, Session};

/// `GET /` and `GET /vaccines/{slug}`.
pub fn pages_router() -> Router<ApiState> {
    Router::new().route("/", get(index)).route("/vaccines/{slug}", get(vaccine_page))
}

/// HTML 404 for anything no route matched.
///
/// # Errors
/// Returns [`PageError::Render`] if the not-found template fails.
pub async fn not_found(uri: Uri) -> Result<Response, PageError> {
    not_found_response(uri.path())
}

fn not_found_response(path: &str) -> Result<Response, PageError> {
    let body = render_not_found(path)?;
    Ok((StatusCode::NOT_FOUND, Html(body)).into_response())
}

async fn index() -> Result<Html<String>, PageError> {
    Ok(Html(render_index()?))
}

async fn vaccine_page(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
    session: Option<Session>,
) -> Result<Response, PageError> {
    let Ok(vaccine) = slug.parse::<VaccineType>() else {
        return not_found_response(&format!("/vaccines/{slug}"));
    };

    let request_id = safe_nanoid!();
    let span = info_span!(
        "vaccine_page",
        %request_id,
        vaccine = vaccine.slug(),
        signed_in = session.is_some()
    );

    async move {
        let content = state.try_get_slice::<Content>().context("content slice")?.source();
        let eligibility =
            state.try_get_slice::<EligibilityService>().context("eligibility slice")?.source();

        let nhs_number = session.as_ref().map(|s| &s.nhs_number);
        let page =
            compose_vaccine_page(vaccine, nhs_number, content.as_ref(), eligibility.as_ref()).await;
        let body = render_vaccine_page(&page)?;

        info!("Vaccine page served");
        // Pages can carry a personal eligibility verdict.
        Ok((
            [(header::CACHE_CONTROL, HeaderValue::from_static("private, no-store"))],
            Html(body),
        )
            .into_response())
    }
    .instrument(span)
    .await
}
