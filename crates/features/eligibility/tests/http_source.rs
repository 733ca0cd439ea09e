use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};
use vacc_domain::config::{ApiConfig, UpstreamConfig};
use vacc_domain::eligibility::{EligibilityError, EligibilityStatus};
use vacc_domain::vaccine::{NhsNumber, VaccineType};
use vacc_eligibility::{EligibilityService, EligibilitySource, HttpEligibilitySource, init};
use vacc_kernel::upstream::UpstreamClient;

const ELIGIBLE: &str = "9000000009";
const SERVICE_DOWN: &str = "9000000017";

fn patient_check() -> Value {
    json!({
        "processedSuggestions": [
            {
                "condition": "FLU",
                "status": "Actionable",
                "statusText": "Get your flu vaccine"
            },
            {
                "condition": "RSV",
                "status": "NotEligible",
                "statusText": "We do not believe you can have it",
                "eligibilityCohorts": [
                    { "cohortText": "are not aged 75 to 79", "cohortStatus": "NotEligible" }
                ],
                "actions": [
                    {
                        "actionType": "InfoText",
                        "description": "Speak to your **GP** if you think this is wrong."
                    }
                ],
                "suitabilityRules": []
            }
        ]
    })
}

async fn check(Path(nhs_number): Path<String>) -> Result<axum::Json<Value>, StatusCode> {
    match nhs_number.as_str() {
        ELIGIBLE => Ok(axum::Json(patient_check())),
        SERVICE_DOWN => Err(StatusCode::SERVICE_UNAVAILABLE),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn spawn_eligibility_service() -> String {
    let app = Router::new().route("/patient-check/{nhs_number}", get(check));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn source(base_url: &str) -> HttpEligibilitySource {
    let config = UpstreamConfig {
        base_url: base_url.to_owned(),
        api_key: "eligibility-key".to_owned(),
        timeout_seconds: Some(5),
    };
    HttpEligibilitySource::new(UpstreamClient::new(&config).expect("client"))
}

fn nhs(raw: &str) -> NhsNumber {
    raw.parse().expect("valid NHS number")
}

#[tokio::test]
async fn returns_filtered_rsv_verdict() {
    let base = spawn_eligibility_service().await;

    let eligibility =
        source(&base).eligibility_for_person(VaccineType::Rsv, &nhs(ELIGIBLE)).await.unwrap();

    assert_eq!(eligibility.status, Some(EligibilityStatus::NotEligible));
    let content = eligibility.content.expect("content");
    let summary = content.summary.expect("summary");
    assert_eq!(summary.heading, "We do not believe you can have it");
    assert_eq!(summary.introduction, "This is because you:");
    assert_eq!(summary.cohorts, vec!["are not aged 75 to 79".to_owned()]);
    assert_eq!(
        content.actions[0].markup,
        "<p>Speak to your <strong>GP</strong> if you think this is wrong.</p>"
    );
}

#[tokio::test]
async fn upstream_failure_collapses_to_loading_error() {
    let base = spawn_eligibility_service().await;

    let result = source(&base).eligibility_for_person(VaccineType::Rsv, &nhs(SERVICE_DOWN)).await;
    assert_eq!(result, Err(EligibilityError::EligibilityLoadingError));
}

#[tokio::test]
async fn vaccine_without_condition_code_is_a_loading_error() {
    let base = spawn_eligibility_service().await;

    let result =
        source(&base).eligibility_for_person(VaccineType::TdIpv3In1, &nhs(ELIGIBLE)).await;
    assert_eq!(result, Err(EligibilityError::EligibilityLoadingError));
}

#[test]
fn init_registers_eligibility_slice() {
    let slice = init(&ApiConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<EligibilityService>());
    assert_eq!(slice.name, "EligibilityService");
}
