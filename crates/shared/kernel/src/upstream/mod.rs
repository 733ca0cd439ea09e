//! Minimal JSON-over-HTTP client for the upstream services (content, eligibility).
//!
//! One [`UpstreamClient`] per service: a base URL, an `apikey` header and an optional
//! request timeout. Every failure mode is an [`UpstreamError`]; callers decide how to
//! degrade.

use crate::domain::config::UpstreamConfig;
use crate::domain::constants::API_KEY_HEADER;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::time::Duration;
use url::Url;

#[vacc_derive::vacc_error]
pub enum UpstreamError {
    #[error("Upstream URL error{}: {source}", format_context(.context))]
    Url { source: url::ParseError, context: Option<Cow<'static, str>> },
    #[error("Upstream transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
    #[error("Upstream returned {status}{}", format_context(.context))]
    Status { status: StatusCode, context: Option<Cow<'static, str>> },
    #[error("Upstream payload error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
    #[error("Upstream configuration error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base: Url,
}

impl UpstreamClient {
    /// Builds a client for one upstream service.
    ///
    /// # Errors
    /// * [`UpstreamError::Url`] / [`UpstreamError::Validation`] for an unusable `base_url`.
    /// * [`UpstreamError::Validation`] if the API key is not a valid header value.
    /// * [`UpstreamError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base = Url::parse(&config.base_url)
            .context(format!("Invalid base URL '{}'", config.base_url))?;
        if base.cannot_be_a_base() {
            return Err(UpstreamError::Validation {
                message: format!("'{}' cannot be used as a base URL", config.base_url).into(),
                context: None,
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !config.api_key.is_empty() {
            let mut key = HeaderValue::from_str(&config.api_key).map_err(|_| {
                UpstreamError::Validation {
                    message: "API key contains characters not allowed in a header".into(),
                    context: None,
                }
            })?;
            key.set_sensitive(true);
            headers.insert(API_KEY_HEADER, key);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, base })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Appends path segments to the base URL. Each segment is percent-encoded.
    ///
    /// # Errors
    /// Returns [`UpstreamError::Validation`] if the base URL cannot take a path.
    pub fn endpoint<I, S>(&self, segments: I) -> Result<Url, UpstreamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| UpstreamError::Validation {
                message: "base URL cannot take path segments".into(),
                context: None,
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET`s `url` and decodes the body as JSON. Non-2xx responses are errors.
    ///
    /// Errors never carry the request URL; paths may contain personal identifiers.
    ///
    /// # Errors
    /// [`UpstreamError::Transport`], [`UpstreamError::Status`] or [`UpstreamError::Decode`].
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { status, context: None });
        }

        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read response body")?;
        let value = serde_json::from_slice(&body).context("Unexpected response shape")?;
        Ok(value)
    }
}
