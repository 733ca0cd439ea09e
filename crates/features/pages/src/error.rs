use std::borrow::Cow;

/// A specialized [`PageError`] enum of this crate.
///
/// Composition itself cannot fail; these only come from rendering and wiring.
#[vacc_derive::vacc_error]
pub enum PageError {
    #[error("Template rendering failed{}: {source}", format_context(.context))]
    Render { source: askama::Error, context: Option<Cow<'static, str>> },
    /// A slice the pages depend on was not registered at startup.
    #[cfg(feature = "server")]
    #[error("Page dependencies unavailable{}: {source}", format_context(.context))]
    State { source: vacc_kernel::server::ApiStateError, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for PageError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(kind = self.kind(), "Page could not be served: {self}");
        (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            axum::response::Html(crate::render::SERVER_ERROR_PAGE),
        )
            .into_response()
    }
}
