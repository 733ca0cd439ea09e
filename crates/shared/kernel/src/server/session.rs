//! Signed-in user, as asserted by the authenticating proxy in front of the service.

use axum::extract::{FromRef, OptionalFromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use std::convert::Infallible;
use vacc_domain::config::ApiConfig;
use vacc_domain::vaccine::NhsNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub nhs_number: NhsNumber,
}

/// Reads the session from `header`. Absent or malformed values mean "not signed in".
#[must_use]
pub fn session_from_headers(headers: &HeaderMap, header: &str) -> Option<Session> {
    let raw = headers.get(header)?;
    let Ok(raw) = raw.to_str() else {
        tracing::debug!(header, "Session header is not valid UTF-8, ignoring");
        return None;
    };

    match raw.parse::<NhsNumber>() {
        Ok(nhs_number) => Some(Session { nhs_number }),
        Err(e) => {
            tracing::debug!(header, "Session header rejected: {e}");
            None
        },
    }
}

impl<S> OptionalFromRequestParts<S> for Session
where
    ApiConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let config = ApiConfig::from_ref(state);
        Ok(session_from_headers(&parts.headers, &config.session.nhs_number_header))
    }
}
