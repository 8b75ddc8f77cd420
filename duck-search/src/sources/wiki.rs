//! Wikipedia REST page summaries.

use serde::Deserialize;
use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fetch::CachedFetcher;
use crate::transport::Transport;
use crate::types::WikiSummary;

#[derive(Debug, Deserialize)]
struct RawSummary {
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
    content_urls: Option<ContentUrls>,
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: Option<String>,
}

/// Build the summary URL: `{wiki_endpoint}page/summary/{query}`, with the
/// query percent-encoded as a single path segment.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the configured endpoint is not a
/// hierarchical URL.
pub fn summary_url(config: &SearchConfig, query: &str) -> Result<String, SearchError> {
    let mut url = Url::parse(&config.wiki_endpoint)
        .map_err(|e| SearchError::Config(format!("wiki_endpoint is not a valid URL: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| SearchError::Config("wiki_endpoint cannot take a path".into()))?
        .pop_if_empty()
        .extend(["page", "summary", query]);
    Ok(url.into())
}

/// Decode a page summary body.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if `body` is not a summary object.
pub fn parse_summary(body: &str) -> Result<WikiSummary, SearchError> {
    let raw: RawSummary = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("summary JSON: {e}")))?;

    Ok(WikiSummary {
        title: raw.title,
        extract: raw.extract,
        url: raw.content_urls.and_then(|c| c.desktop).and_then(|d| d.page),
        thumbnail: raw.thumbnail.and_then(|t| t.source),
    })
}

/// Fetch the page summary for `query`, or `None` on any failure.
///
/// A non-success status (typically 404 for an unknown title) is an ordinary
/// miss and logged at debug; other failures are logged at warn.
pub async fn wiki_summary<T: Transport>(
    fetcher: &CachedFetcher<T>,
    config: &SearchConfig,
    query: &str,
) -> Option<WikiSummary> {
    tracing::trace!(query, "wiki summary");
    match try_wiki_summary(fetcher, config, query).await {
        Ok(summary) => Some(summary),
        Err(err @ SearchError::Status { .. }) => {
            tracing::debug!(error = %err, "no wiki summary");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "wiki summary failed");
            None
        }
    }
}

async fn try_wiki_summary<T: Transport>(
    fetcher: &CachedFetcher<T>,
    config: &SearchConfig,
    query: &str,
) -> Result<WikiSummary, SearchError> {
    let url = summary_url(config, query)?;
    let body = fetcher.get(&url).await?;
    parse_summary(&body)
}
