//! # duck-search
//!
//! One async call for three kinds of search results: ranked web results
//! scraped from DuckDuckGo's HTML page, a DuckDuckGo instant answer, and a
//! Wikipedia page summary.
//!
//! ## Design
//!
//! - The three sources run concurrently; each degrades on its own
//!   (skipped pages, `None`) instead of failing the whole search
//! - Raw response bodies are cached per client, keyed by request URL, with
//!   FIFO eviction at a fixed capacity
//! - Result pages are fetched sequentially with a fixed delay plus jitter
//! - Every request has a timeout, and a client-wide cancellation token
//!   aborts in-flight requests
//! - Queries are logged only at trace level
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> duck_search::Result<()> {
//! use duck_search::{DuckSearch, SearchConfig};
//!
//! let client = DuckSearch::new(SearchConfig {
//!     delay_ms: 500,
//!     ..Default::default()
//! })?;
//!
//! let results = client.text("rust async runtime", 2, 10).await;
//! let answer = client.instant("What is Rust?").await;
//! let everything = client.search("Rust", 20, 1).await;
//! # let _ = (results, answer, everything);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod link;
pub mod pacing;
pub mod sources;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cache::ResponseCache;
pub use client::DuckSearch;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use http::HttpTransport;
pub use transport::{FetchResponse, Transport};
pub use types::{AggregatedResult, InstantAnswer, SearchResult, WikiSummary};
