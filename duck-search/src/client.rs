//! The aggregating client: one object, three sources, one shared cache.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::cache::ResponseCache;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fetch::CachedFetcher;
use crate::http::{self, HttpTransport};
use crate::pacing::RateLimiter;
use crate::sources::{instant, text, wiki};
use crate::transport::Transport;
use crate::types::{AggregatedResult, InstantAnswer, SearchResult, WikiSummary};

/// Pages scraped by [`DuckSearch::text_default`] and [`DuckSearch::search_default`].
pub const DEFAULT_PAGES: usize = 1;

/// Result cap used by [`DuckSearch::text_default`] and [`DuckSearch::search_default`].
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Search client combining web results, instant answers and Wikipedia
/// summaries.
///
/// Every client owns its own response cache, so differently configured
/// clients never share bodies. None of the search operations return errors:
/// unavailable sources show up as an empty list or `None`.
#[derive(Debug)]
pub struct DuckSearch<T = HttpTransport> {
    config: SearchConfig,
    fetcher: CachedFetcher<T>,
    limiter: RateLimiter,
}

impl DuckSearch<HttpTransport> {
    /// Create a client using the reqwest-backed transport.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> DuckSearch<T> {
    /// Create a client over a custom [`Transport`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn with_transport(config: SearchConfig, transport: T) -> Result<Self, SearchError> {
        config.validate()?;
        let headers = http::default_headers(&config)?;
        let cache = Arc::new(ResponseCache::new(config.cache_size));
        let fetcher = CachedFetcher::new(
            transport,
            cache,
            headers,
            Duration::from_secs(config.timeout_seconds),
            CancellationToken::new(),
        );
        let limiter = RateLimiter::new(config.delay_ms, config.jitter_ms);

        tracing::debug!(
            cache_size = config.cache_size,
            delay_ms = config.delay_ms,
            safe_search = config.safe_search,
            "search client ready"
        );

        Ok(Self {
            config,
            fetcher,
            limiter,
        })
    }

    /// Scrape up to `pages` result pages and return at most `max_results`
    /// web results in page-then-position order.
    ///
    /// Failed pages are skipped, so the list may be shorter than requested
    /// or empty.
    pub async fn text(&self, query: &str, pages: usize, max_results: usize) -> Vec<SearchResult> {
        text::text_search(
            &self.fetcher,
            &self.limiter,
            &self.config,
            query,
            pages,
            max_results,
        )
        .await
    }

    /// [`text`](Self::text) with one page and up to 20 results.
    pub async fn text_default(&self, query: &str) -> Vec<SearchResult> {
        self.text(query, DEFAULT_PAGES, DEFAULT_MAX_RESULTS).await
    }

    /// Fetch the instant answer for `query`, `None` if unavailable.
    pub async fn instant(&self, query: &str) -> Option<InstantAnswer> {
        instant::instant_answer(&self.fetcher, &self.config, query).await
    }

    /// Fetch the Wikipedia summary for `query`, `None` if unavailable.
    pub async fn wiki(&self, query: &str) -> Option<WikiSummary> {
        wiki::wiki_summary(&self.fetcher, &self.config, query).await
    }

    /// Query all three sources concurrently and combine the results.
    ///
    /// Waits for every source regardless of how the others fare; a failing
    /// source only blanks its own field.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() -> duck_search::Result<()> {
    /// let client = duck_search::DuckSearch::new(duck_search::SearchConfig::default())?;
    /// let result = client.search("rust programming", 10, 1).await;
    /// for hit in &result.text {
    ///     println!("{}: {}", hit.title, hit.link);
    /// }
    /// if let Some(wiki) = &result.wiki {
    ///     println!("{}", wiki.extract);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str, max_results: usize, pages: usize) -> AggregatedResult {
        let (text, instant, wiki) = futures::join!(
            self.text(query, pages, max_results),
            self.instant(query),
            self.wiki(query)
        );

        tracing::debug!(
            text = text.len(),
            instant = instant.is_some(),
            wiki = wiki.is_some(),
            "aggregated search complete"
        );

        AggregatedResult {
            text,
            instant,
            wiki,
        }
    }

    /// [`search`](Self::search) with up to 20 results from one page.
    pub async fn search_default(&self, query: &str) -> AggregatedResult {
        self.search(query, DEFAULT_MAX_RESULTS, DEFAULT_PAGES).await
    }

    /// Abort in-flight and future requests of this client.
    ///
    /// Operations still return normally: partial text results and `None`
    /// for the JSON sources.
    pub fn cancel(&self) {
        self.fetcher.cancellation().cancel();
    }

    /// A handle to this client's cancellation token.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.fetcher.cancellation().clone()
    }

    /// The client's response cache.
    pub fn cache(&self) -> &ResponseCache {
        self.fetcher.cache()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
