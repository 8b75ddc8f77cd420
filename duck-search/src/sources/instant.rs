//! DuckDuckGo instant answer API.

use serde::Deserialize;
use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fetch::CachedFetcher;
use crate::transport::Transport;
use crate::types::InstantAnswer;

/// The subset of the instant answer payload we read.
#[derive(Debug, Deserialize)]
struct RawInstantAnswer {
    #[serde(rename = "Heading")]
    heading: Option<String>,
    #[serde(rename = "AbstractText")]
    abstract_text: Option<String>,
    /// Usually a string, but some answer types return an object.
    #[serde(rename = "Answer")]
    answer: Option<serde_json::Value>,
    #[serde(rename = "AbstractURL")]
    abstract_url: Option<String>,
    #[serde(rename = "Type")]
    answer_type: Option<String>,
}

/// Build the instant answer URL for `query`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the configured endpoint is not a URL.
pub fn instant_url(config: &SearchConfig, query: &str) -> Result<String, SearchError> {
    let mut url = Url::parse(&config.instant_endpoint)
        .map_err(|e| SearchError::Config(format!("instant_endpoint is not a valid URL: {e}")))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("q", query);
        pairs.append_pair("format", "json");
        pairs.append_pair("no_html", "1");
        if config.safe_search {
            pairs.append_pair("kp", "1");
        }
    }
    Ok(url.into())
}

/// Decode an instant answer body.
///
/// `answer` prefers a non-empty `AbstractText`, then a non-empty string
/// `Answer`. Empty `AbstractURL` is treated as absent.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if `body` is not an instant answer object.
pub fn parse_instant_answer(body: &str) -> Result<InstantAnswer, SearchError> {
    let raw: RawInstantAnswer = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("instant answer JSON: {e}")))?;

    let answer = non_empty(raw.abstract_text).or_else(|| {
        raw.answer
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    });

    Ok(InstantAnswer {
        heading: raw.heading,
        answer,
        url: non_empty(raw.abstract_url),
        answer_type: raw.answer_type,
    })
}

/// Fetch the instant answer for `query`, or `None` on any failure.
///
/// Failures are logged at warn level only; a missing answer and a failed
/// request look the same to the caller.
pub async fn instant_answer<T: Transport>(
    fetcher: &CachedFetcher<T>,
    config: &SearchConfig,
    query: &str,
) -> Option<InstantAnswer> {
    tracing::trace!(query, "instant answer");
    match try_instant_answer(fetcher, config, query).await {
        Ok(answer) => Some(answer),
        Err(err) => {
            tracing::warn!(error = %err, "instant answer failed");
            None
        }
    }
}

async fn try_instant_answer<T: Transport>(
    fetcher: &CachedFetcher<T>,
    config: &SearchConfig,
    query: &str,
) -> Result<InstantAnswer, SearchError> {
    let url = instant_url(config, query)?;
    let body = fetcher.get(&url).await?;
    parse_instant_answer(&body)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
