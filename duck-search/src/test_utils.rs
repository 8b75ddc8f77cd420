//! In-memory transport double shared by the unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::error::SearchError;
use crate::transport::{FetchResponse, Transport};

/// Answers requests from a list of `(url prefix, response)` routes and
/// records every URL it is asked for. Unrouted URLs fail with
/// [`SearchError::Http`]. Clones share the same routes and call log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<Vec<(String, FetchResponse)>>>,
    calls: Arc<Mutex<Vec<String>>>,
    latency: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer URLs starting with `prefix`. Earlier routes win.
    pub fn route(self, prefix: &str, response: FetchResponse) -> Self {
        self.routes
            .lock()
            .expect("routes lock")
            .push((prefix.to_owned(), response));
        self
    }

    /// Delay every response by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn lookup(&self, url: &str) -> Option<FetchResponse> {
        self.routes
            .lock()
            .expect("routes lock")
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, response)| response.clone())
    }
}

impl Transport for MockTransport {
    async fn fetch(&self, url: &str, _headers: &HeaderMap) -> Result<FetchResponse, SearchError> {
        self.calls.lock().expect("calls lock").push(url.to_owned());
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.lookup(url)
            .ok_or_else(|| SearchError::Http(format!("no route for {url}")))
    }
}

/// A results page with `count` blocks titled `{label} 0`, `{label} 1`, ...
pub fn results_page(label: &str, count: usize) -> String {
    let blocks: String = (0..count)
        .map(|i| {
            format!(
                r#"<div class="result results_links web-result">
  <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2F{label}.example%2F{i}&amp;rut=x">{label} {i}</a>
  <a class="result__snippet">snippet {label} {i}</a>
</div>
"#
            )
        })
        .collect();
    format!("<html><body>{blocks}</body></html>")
}
