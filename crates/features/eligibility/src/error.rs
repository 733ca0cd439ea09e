use std::borrow::Cow;
use vacc_kernel::upstream::UpstreamError;

/// A specialized [`EligibilityClientError`] enum of this crate.
#[vacc_derive::vacc_error]
pub enum EligibilityClientError {
    #[error("Eligibility service error{}: {source}", format_context(.context))]
    Upstream { source: UpstreamError, context: Option<Cow<'static, str>> },
    /// The eligibility service has no condition code for this vaccine.
    #[error("Vaccine not covered by the eligibility service{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
