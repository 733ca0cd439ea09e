#![allow(dead_code, unreachable_pub)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Barrier;
use vacc_content::ContentSource;
use vacc_domain::content::{ContentError, ContentResult, StyledSection, StyledVaccineContent};
use vacc_domain::eligibility::{
    Action, ActionButton, ActionKind, Eligibility, EligibilityContent, EligibilityError,
    EligibilityResult, EligibilityStatus, Summary,
};
use vacc_domain::vaccine::{NhsNumber, VaccineType};
use vacc_eligibility::EligibilitySource;

pub const NHS_NUMBER: &str = "9000000009";

pub fn nhs_number() -> NhsNumber {
    NHS_NUMBER.parse().expect("valid NHS number")
}

pub fn how_to_get_section() -> StyledSection {
    StyledSection {
        heading: "How to get the RSV vaccine".to_owned(),
        markup: "<p>Your GP surgery will contact you.</p>".to_owned(),
    }
}

pub fn styled_content() -> StyledVaccineContent {
    StyledVaccineContent {
        overview: "RSV is a common virus that can make you seriously ill.".to_owned(),
        what_vaccine_is_for: Some(StyledSection {
            heading: "What the RSV vaccine is for".to_owned(),
            markup: "<p>It protects against RSV.</p>".to_owned(),
        }),
        who_vaccine_is_for: Some(StyledSection {
            heading: "Who should have the RSV vaccine".to_owned(),
            markup: "<p>Adults aged 75 to 79.</p>".to_owned(),
        }),
        how_to_get_vaccine: how_to_get_section(),
        vaccine_side_effects: None,
        web_link: Some("https://www.nhs.uk/vaccinations/rsv-vaccine/".to_owned()),
    }
}

pub fn verdict() -> Eligibility {
    Eligibility {
        status: Some(EligibilityStatus::Actionable),
        content: Some(
            EligibilityContent::builder()
                .summary(
                    Summary::builder()
                        .heading("You should have the RSV vaccine")
                        .introduction("This is because you're:")
                        .cohorts(vec!["aged 75 to 79".to_owned()])
                        .build(),
                )
                .actions(vec![Action {
                    kind: ActionKind::ButtonWithAuthLink,
                    markup: "<p>Book your appointment online.</p>".to_owned(),
                    button: Some(ActionButton {
                        label: "Book now".to_owned(),
                        url: "https://book.test/rsv".to_owned(),
                    }),
                }])
                .build(),
        ),
    }
}

#[derive(Debug)]
pub struct StubContent {
    outcome: ContentResult,
    calls: AtomicUsize,
    barrier: Option<Arc<Barrier>>,
}

impl StubContent {
    pub fn ok() -> Self {
        Self::with(Ok(styled_content()))
    }

    pub fn failing() -> Self {
        Self::with(Err(ContentError::ContentLoadingError))
    }

    pub fn with(outcome: ContentResult) -> Self {
        Self { outcome, calls: AtomicUsize::new(0), barrier: None }
    }

    /// Blocks each call until the paired eligibility call arrives too.
    pub fn rendezvous(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for StubContent {
    async fn content_for_vaccine(&self, _vaccine: VaccineType) -> ContentResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        self.outcome.clone()
    }
}

#[derive(Debug)]
pub struct StubEligibility {
    outcome: EligibilityResult,
    calls: AtomicUsize,
    barrier: Option<Arc<Barrier>>,
}

impl StubEligibility {
    pub fn ok() -> Self {
        Self::with(Ok(verdict()))
    }

    pub fn failing() -> Self {
        Self::with(Err(EligibilityError::EligibilityLoadingError))
    }

    pub fn with(outcome: EligibilityResult) -> Self {
        Self { outcome, calls: AtomicUsize::new(0), barrier: None }
    }

    pub fn rendezvous(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EligibilitySource for StubEligibility {
    async fn eligibility_for_person(
        &self,
        _vaccine: VaccineType,
        nhs_number: &NhsNumber,
    ) -> EligibilityResult {
        assert_eq!(nhs_number.as_str(), NHS_NUMBER);
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        self.outcome.clone()
    }
}
