//! reqwest-backed [`Transport`] and the default request header set.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::transport::{FetchResponse, Transport};

/// User-Agent sent unless the configured headers override it.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Build the request headers: the default `User-Agent` overlaid with
/// `config.headers`. Header names are case-insensitive, so a configured
/// `user-agent` replaces the default.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid header name or value.
pub fn default_headers(config: &SearchConfig) -> Result<HeaderMap, SearchError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    for (name, value) in config.header_map()? {
        if let Some(name) = name {
            headers.insert(name, value);
        }
    }
    Ok(headers)
}

/// Build a [`reqwest::Client`] for provider requests.
///
/// The client has:
/// - Cookie store enabled
/// - Timeout from config
/// - Brotli and gzip decompression
/// - Up to 10 redirects followed
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// [`Transport`] over a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }

    /// Wrap an existing client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, headers: &HeaderMap) -> Result<FetchResponse, SearchError> {
        let response = self
            .client
            .get(url)
            .headers(headers.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout(format!("request to {url} timed out"))
                } else {
                    SearchError::Http(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("response read failed: {e}")))?;

        tracing::trace!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(FetchResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        })
    }
}
