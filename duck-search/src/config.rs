//! Client configuration with sensible defaults.
//!
//! [`SearchConfig`] controls pacing, safe search, extra request headers,
//! cache capacity, pagination stride and per-request timeouts. The defaults
//! are tuned for polite scraping of the DuckDuckGo HTML endpoint.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::SearchError;

/// DuckDuckGo's JavaScript-free results page.
pub const DEFAULT_HTML_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo instant answer API.
pub const DEFAULT_INSTANT_ENDPOINT: &str = "https://api.duckduckgo.com/";

/// Wikipedia REST API root; summaries live under `page/summary/{title}`.
pub const DEFAULT_WIKI_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/";

/// Configuration for a [`DuckSearch`](crate::DuckSearch) client.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour. The configuration is fixed once a
/// client has been built.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base pause in milliseconds between successive scrape page requests.
    pub delay_ms: u64,
    /// Upper bound in milliseconds of the random jitter added to `delay_ms`.
    pub jitter_ms: u64,
    /// Append the `kp=1` safe-search flag to scrape and instant answer URLs.
    pub safe_search: bool,
    /// Extra request headers, merged over the default `User-Agent`.
    pub headers: BTreeMap<String, String>,
    /// Maximum number of raw response bodies kept in the response cache.
    /// Set to 0 to disable caching.
    pub cache_size: usize,
    /// Result offset stride used when paging through scrape results.
    pub results_per_page: usize,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Base URL of the HTML results page.
    pub html_endpoint: String,
    /// Base URL of the instant answer API.
    pub instant_endpoint: String,
    /// Base URL of the Wikipedia REST API.
    pub wiki_endpoint: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            jitter_ms: 200,
            safe_search: true,
            headers: BTreeMap::new(),
            cache_size: 100,
            results_per_page: 10,
            timeout_seconds: 8,
            html_endpoint: DEFAULT_HTML_ENDPOINT.to_owned(),
            instant_endpoint: DEFAULT_INSTANT_ENDPOINT.to_owned(),
            wiki_endpoint: DEFAULT_WIKI_ENDPOINT.to_owned(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `results_per_page` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - every endpoint must be an absolute URL
    /// - every entry in `headers` must be a valid HTTP header
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.results_per_page == 0 {
            return Err(SearchError::Config(
                "results_per_page must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        for (field, value) in [
            ("html_endpoint", &self.html_endpoint),
            ("instant_endpoint", &self.instant_endpoint),
            ("wiki_endpoint", &self.wiki_endpoint),
        ] {
            Url::parse(value)
                .map_err(|e| SearchError::Config(format!("{field} is not a valid URL: {e}")))?;
        }
        self.header_map()?;
        Ok(())
    }

    /// The configured `headers` as a [`HeaderMap`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid header name or value.
    pub fn header_map(&self) -> Result<HeaderMap, SearchError> {
        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| SearchError::Config(format!("invalid header name: {name}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| SearchError::Config(format!("invalid value for header {name}")))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}
