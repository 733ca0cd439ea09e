#![cfg(feature = "server")]

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{NHS_NUMBER, StubContent, StubEligibility};
use std::sync::Arc;
use tower::ServiceExt;
use vacc_content::Content;
use vacc_domain::config::ApiConfig;
use vacc_domain::registry::InitializedSlice;
use vacc_eligibility::EligibilityService;
use vacc_kernel::server::ApiState;
use vacc_pages::{not_found, pages_router};

fn app(content: StubContent, eligibility: StubEligibility) -> Router {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(Content::from_source(Arc::new(content))))
        .register_slice(InitializedSlice::new(EligibilityService::from_source(Arc::new(
            eligibility,
        ))))
        .build()
        .expect("state");

    pages_router().fallback(not_found).with_state(state)
}

async fn get(app: Router, uri: &str, nhs_number: Option<&str>) -> (StatusCode, Option<String>, String) {
    let mut request = Request::builder().uri(uri);
    if let Some(nhs_number) = nhs_number {
        request = request.header("x-nhs-number", nhs_number);
    }
    let response = app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap();

    let status = response.status();
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, cache, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn signed_in_rsv_page_shows_personal_panel() {
    let (status, cache, body) =
        get(app(StubContent::ok(), StubEligibility::ok()), "/vaccines/rsv", Some(NHS_NUMBER)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some("private, no-store"));
    assert!(body.contains(r#"data-testid="eligibility-panel""#));
}

#[tokio::test]
async fn signed_out_rsv_page_shows_fallback_panel() {
    let (status, _, body) =
        get(app(StubContent::ok(), StubEligibility::ok()), "/vaccines/rsv", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-testid="eligibility-fallback""#));
}

#[tokio::test]
async fn malformed_session_is_treated_as_signed_out() {
    let (_, _, body) =
        get(app(StubContent::ok(), StubEligibility::ok()), "/vaccines/rsv", Some("12")).await;

    assert!(body.contains(r#"data-testid="eligibility-fallback""#));
}

#[tokio::test]
async fn td_ipv_page_with_failed_content_links_out() {
    let (status, _, body) = get(
        app(StubContent::failing(), StubEligibility::ok()),
        "/vaccines/td-ipv-3-in-1",
        Some(NHS_NUMBER),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-testid="find-out-more-link""#));
    assert!(body.contains(r#"data-testid="more-information-hr""#));
}

#[tokio::test]
async fn unknown_vaccine_is_not_found() {
    let (status, cache, body) =
        get(app(StubContent::ok(), StubEligibility::ok()), "/vaccines/flu", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(cache.is_none());
    assert!(body.contains(r#"data-testid="not-found""#));
}

#[tokio::test]
async fn unknown_route_uses_fallback_page() {
    let (status, _, body) =
        get(app(StubContent::ok(), StubEligibility::ok()), "/nowhere", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains(r#"data-testid="not-found""#));
}

#[tokio::test]
async fn index_lists_vaccines() {
    let (status, _, body) = get(app(StubContent::ok(), StubEligibility::ok()), "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/vaccines/rsv-pregnancy""#));
}

#[tokio::test]
async fn missing_slices_are_a_server_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");
    let app = pages_router().with_state(state);

    let (status, cache, _) = get(app, "/vaccines/rsv", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(cache.is_none());
}
