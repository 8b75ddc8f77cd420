//! Result types returned by the three sources and the aggregator.

use serde::{Deserialize, Serialize};

/// A single ranked web result scraped from the HTML results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// The destination URL, with any redirect wrapper removed.
    pub link: String,
    /// A text snippet summarising the page content.
    pub snippet: String,
}

/// A structured direct answer from the instant answer API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantAnswer {
    /// Topic heading, when the API provides one.
    pub heading: Option<String>,
    /// Abstract text, falling back to the short direct answer.
    pub answer: Option<String>,
    /// Source URL of the abstract.
    pub url: Option<String>,
    /// Answer category code (`A` article, `D` disambiguation, ...).
    #[serde(rename = "type")]
    pub answer_type: Option<String>,
}

/// Page summary from the Wikipedia REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiSummary {
    /// Canonical page title.
    pub title: String,
    /// Plain-text lead extract.
    pub extract: String,
    /// Desktop page URL.
    pub url: Option<String>,
    /// Thumbnail image URL.
    pub thumbnail: Option<String>,
}

/// Combined output of [`DuckSearch::search`](crate::DuckSearch::search).
///
/// `text` is empty and `instant`/`wiki` are `None` when the corresponding
/// source is unavailable; none of them signal an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// Web results in page-then-position order.
    pub text: Vec<SearchResult>,
    /// Instant answer, if any.
    pub instant: Option<InstantAnswer>,
    /// Encyclopedia summary, if any.
    pub wiki: Option<WikiSummary>,
}
