//! Cache-through fetching shared by all three sources.
//!
//! [`CachedFetcher`] is the only place that touches the [`ResponseCache`]:
//! a hit returns the stored body without calling the transport, a successful
//! miss fills the cache. Every transport call is bounded by the configured
//! timeout and aborted when the client's cancellation token fires.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use tokio_util::sync::CancellationToken;

use crate::cache::ResponseCache;
use crate::error::SearchError;
use crate::transport::Transport;

/// Transport + cache + fixed request headers.
#[derive(Debug)]
pub struct CachedFetcher<T> {
    transport: T,
    cache: Arc<ResponseCache>,
    headers: HeaderMap,
    timeout: Duration,
    cancel: CancellationToken,
}

impl<T: Transport> CachedFetcher<T> {
    /// Create a fetcher over `transport`, sharing `cache`.
    pub fn new(
        transport: T,
        cache: Arc<ResponseCache>,
        headers: HeaderMap,
        timeout: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            transport,
            cache,
            headers,
            timeout,
            cancel,
        }
    }

    /// Return the body for `url`, from cache if possible.
    ///
    /// Only 2xx bodies are cached.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Status`] for a non-success status
    /// - [`SearchError::Timeout`] if the transport exceeds the timeout
    /// - [`SearchError::Cancelled`] if the cancellation token fires first
    /// - any transport error unchanged
    pub async fn get(&self, url: &str) -> Result<String, SearchError> {
        if let Some(body) = self.cache.get(url) {
            tracing::trace!(url, "cache hit");
            return Ok(body);
        }
        if self.cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let response = tokio::select! {
            _ = self.cancel.cancelled() => return Err(SearchError::Cancelled),
            outcome = tokio::time::timeout(self.timeout, self.transport.fetch(url, &self.headers)) => {
                outcome.map_err(|_| {
                    SearchError::Timeout(format!("exceeded {}s limit", self.timeout.as_secs()))
                })??
            }
        };

        if !response.is_success() {
            return Err(SearchError::Status {
                status: response.status,
                status_text: response.status_text,
            });
        }

        self.cache.put(url, response.body.clone());
        Ok(response.body)
    }

    /// The shared response cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// The token that aborts in-flight requests.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }
}
