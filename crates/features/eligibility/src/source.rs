use crate::error::{EligibilityClientError, EligibilityClientErrorExt};
use crate::filter::filter_for_condition;
use crate::response::PatientCheck;
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::{debug, warn};
use vacc_domain::eligibility::{Eligibility, EligibilityError, EligibilityResult};
use vacc_domain::vaccine::{NhsNumber, VaccineType};
use vacc_kernel::upstream::UpstreamClient;

const PATIENT_CHECK_PATH: &str = "patient-check";

/// Where personalised eligibility verdicts come from.
///
/// Failures are logged by the implementation and surface as
/// [`EligibilityError::EligibilityLoadingError`].
#[async_trait]
pub trait EligibilitySource: Send + Sync + Debug {
    async fn eligibility_for_person(
        &self,
        vaccine: VaccineType,
        nhs_number: &NhsNumber,
    ) -> EligibilityResult;
}

/// [`EligibilitySource`] backed by the eligibility service's `patient-check` endpoint.
#[derive(Debug, Clone)]
pub struct HttpEligibilitySource {
    client: UpstreamClient,
}

impl HttpEligibilitySource {
    #[must_use]
    pub const fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    async fn fetch(
        &self,
        vaccine: VaccineType,
        nhs_number: &NhsNumber,
    ) -> Result<Eligibility, EligibilityClientError> {
        let condition = vaccine.details().eligibility_condition.ok_or_else(|| {
            EligibilityClientError::Unsupported { message: vaccine.slug().into(), context: None }
        })?;

        let url = self.client.endpoint([PATIENT_CHECK_PATH, nhs_number.as_str()])?;
        debug!(%vaccine, condition, "Requesting patient check");

        let check: PatientCheck =
            self.client.get_json(url).await.context(PATIENT_CHECK_PATH)?;
        Ok(filter_for_condition(&check, condition))
    }
}

#[async_trait]
impl EligibilitySource for HttpEligibilitySource {
    async fn eligibility_for_person(
        &self,
        vaccine: VaccineType,
        nhs_number: &NhsNumber,
    ) -> EligibilityResult {
        self.fetch(vaccine, nhs_number).await.map_err(|e| {
            warn!(%vaccine, kind = e.kind(), "Eligibility unavailable: {e}");
            EligibilityError::EligibilityLoadingError
        })
    }
}
