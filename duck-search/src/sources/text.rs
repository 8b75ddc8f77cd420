//! Paginated scrape of the DuckDuckGo HTML results page.

use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::extract::extract_results;
use crate::fetch::CachedFetcher;
use crate::pacing::RateLimiter;
use crate::transport::Transport;
use crate::types::SearchResult;

/// Build the results-page URL for `query` starting at result `offset`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the configured endpoint is not a URL.
pub fn page_url(config: &SearchConfig, query: &str, offset: usize) -> Result<String, SearchError> {
    let mut url = Url::parse(&config.html_endpoint)
        .map_err(|e| SearchError::Config(format!("html_endpoint is not a valid URL: {e}")))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("q", query);
        pairs.append_pair("s", &offset.to_string());
        if config.safe_search {
            pairs.append_pair("kp", "1");
        }
    }
    Ok(url.into())
}

/// Scrape up to `pages` result pages, returning at most `max_results`
/// records in page-then-position order.
///
/// Pages are fetched strictly one after another with a [`RateLimiter`]
/// pause before each page after the first. A failed page is logged and
/// skipped; the loop stops early once `max_results` records are held or
/// the client is cancelled.
pub async fn text_search<T: Transport>(
    fetcher: &CachedFetcher<T>,
    limiter: &RateLimiter,
    config: &SearchConfig,
    query: &str,
    pages: usize,
    max_results: usize,
) -> Vec<SearchResult> {
    tracing::trace!(query, pages, max_results, "text search");

    let mut results = Vec::new();
    for page in 0..pages {
        if results.len() >= max_results {
            break;
        }
        if page > 0 && !limiter.wait_or_cancel(fetcher.cancellation()).await {
            tracing::debug!(page, "text search cancelled while pacing");
            break;
        }

        match fetch_page(fetcher, config, query, page).await {
            Ok(page_results) => {
                tracing::debug!(page, count = page_results.len(), "results page parsed");
                results.extend(page_results);
            }
            Err(SearchError::Cancelled) => {
                tracing::debug!(page, "text search cancelled");
                break;
            }
            Err(err) => {
                tracing::warn!(page, error = %err, "results page failed, continuing");
            }
        }
    }

    results.truncate(max_results);
    results
}

async fn fetch_page<T: Transport>(
    fetcher: &CachedFetcher<T>,
    config: &SearchConfig,
    query: &str,
    page: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let offset = page.saturating_mul(config.results_per_page);
    let url = page_url(config, query, offset)?;
    let html = fetcher.get(&url).await?;
    extract_results(&html)
}
