//! Result extraction from the DuckDuckGo HTML results page.
//!
//! Each organic result is a `div.result` block holding an `a.result__a`
//! title anchor and a `.result__snippet` element. Blocks are processed
//! independently: one malformed block never stops extraction of the rest.

use scraper::{ElementRef, Html, Selector};

use crate::error::SearchError;
use crate::link::decode_link;
use crate::types::SearchResult;

/// Compiled selectors for one extraction pass.
struct ResultSelectors {
    block: Selector,
    title: Selector,
    snippet: Selector,
}

impl ResultSelectors {
    fn new() -> Result<Self, SearchError> {
        let block = Selector::parse("div.result")
            .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
        let title = Selector::parse("a.result__a")
            .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
        let snippet = Selector::parse(".result__snippet")
            .map_err(|e| SearchError::Parse(format!("invalid snippet selector: {e:?}")))?;
        Ok(Self {
            block,
            title,
            snippet,
        })
    }
}

/// Extract `(title, link, snippet)` records from a results page.
///
/// Records come back in document order. Blocks without a title anchor are
/// skipped silently; blocks whose anchor has no `href` are logged and
/// skipped. Links are passed through [`decode_link`].
///
/// # Errors
///
/// Returns [`SearchError::Parse`] only if the built-in selectors fail to
/// compile; the document itself never causes an error.
pub fn extract_results(html: &str) -> Result<Vec<SearchResult>, SearchError> {
    let selectors = ResultSelectors::new()?;
    let document = Html::parse_document(html);

    let mut results = Vec::new();
    for (position, block) in document.select(&selectors.block).enumerate() {
        match parse_block(block, &selectors) {
            Ok(Some(result)) => results.push(result),
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(position, error = %err, "skipping malformed result block");
            }
        }
    }

    tracing::debug!(count = results.len(), "results extracted");
    Ok(results)
}

/// Parse one result block.
///
/// `Ok(None)` means the block carries no title anchor and is not a result.
fn parse_block(
    block: ElementRef<'_>,
    selectors: &ResultSelectors,
) -> Result<Option<SearchResult>, SearchError> {
    let Some(title_el) = block.select(&selectors.title).next() else {
        return Ok(None);
    };

    let href = title_el
        .value()
        .attr("href")
        .ok_or_else(|| SearchError::Parse("result title has no href".into()))?;

    let snippet = block
        .select(&selectors.snippet)
        .next()
        .map(element_text)
        .unwrap_or_default();

    Ok(Some(SearchResult {
        title: element_text(title_el),
        link: decode_link(href),
        snippet,
    }))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}
