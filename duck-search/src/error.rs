//! Error types for the duck-search crate.
//!
//! These errors stay internal to the source clients for the most part: the
//! public search operations degrade to empty or `None` results instead of
//! returning them. Only client construction surfaces a [`SearchError`].

/// Errors that can occur while fetching or decoding a provider response.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered with a non-success status code.
    #[error("unexpected status: {status} {status_text}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase, empty if unknown.
        status_text: String,
    },

    /// Failed to parse a provider response (HTML or JSON).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A single request exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The client's cancellation token fired while the request was in flight.
    #[error("request cancelled")]
    Cancelled,
}

/// Convenience type alias for duck-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_status() {
        let err = SearchError::Status {
            status: 503,
            status_text: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "unexpected status: 503 Service Unavailable");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("expected value at line 1".into());
        assert_eq!(err.to_string(), "parse error: expected value at line 1");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("results_per_page must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: results_per_page must be greater than 0"
        );
    }

    #[test]
    fn display_timeout_and_cancelled() {
        let err = SearchError::Timeout("exceeded 8s limit".into());
        assert_eq!(err.to_string(), "request timed out: exceeded 8s limit");
        assert_eq!(SearchError::Cancelled.to_string(), "request cancelled");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
