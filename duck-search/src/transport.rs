//! The fetch capability every source is built on.
//!
//! [`Transport`] abstracts "GET this URL with these headers" so the sources
//! can be driven by the reqwest-backed [`HttpTransport`](crate::http::HttpTransport)
//! in production and by an in-memory double in tests.

use std::future::Future;

use reqwest::header::HeaderMap;

use crate::error::SearchError;

/// Status and body of one completed request.
///
/// Non-success statuses are still `Ok` at this layer; deciding what counts
/// as a failure is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Canonical reason phrase, empty if unknown.
    pub status_text: String,
    /// Response body decoded as text.
    pub body: String,
}

impl FetchResponse {
    /// Build a response with the canonical reason phrase for `status`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_owned();
        Self {
            status,
            status_text,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A pluggable HTTP GET capability.
///
/// Implementations must be `Send + Sync`: the three sources call the same
/// transport concurrently.
pub trait Transport: Send + Sync {
    /// Fetch `url` with `headers`, returning status and body.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] when no response could be obtained at all
    /// (connection failure, timeout, unreadable body).
    fn fetch(
        &self,
        url: &str,
        headers: &HeaderMap,
    ) -> impl Future<Output = Result<FetchResponse, SearchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_reason_phrase() {
        let response = FetchResponse::new(404, "");
        assert_eq!(response.status_text, "Not Found");
        assert!(!response.is_success());
    }

    #[test]
    fn unknown_status_has_empty_reason() {
        let response = FetchResponse::new(599, "");
        assert!(response.status_text.is_empty());
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(FetchResponse::new(200, "").is_success());
        assert!(FetchResponse::new(204, "").is_success());
        assert!(!FetchResponse::new(301, "").is_success());
        assert!(!FetchResponse::new(500, "").is_success());
    }
}
