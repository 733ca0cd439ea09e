use std::borrow::Cow;
use vacc_kernel::upstream::UpstreamError;

/// A specialized [`ContentClientError`] enum of this crate.
///
/// Never reaches the page composer: the slice logs it and hands out
/// [`vacc_domain::content::ContentError::ContentLoadingError`] instead.
#[vacc_derive::vacc_error]
pub enum ContentClientError {
    /// Transport, status or payload failure talking to the content service.
    #[error("Content service error{}: {source}", format_context(.context))]
    Upstream { source: UpstreamError, context: Option<Cow<'static, str>> },
    /// The document decoded but lacks a section every page needs.
    #[error("Content document incomplete{}: {message}", format_context(.context))]
    MissingSection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
