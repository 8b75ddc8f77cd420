//! Redirect-link decoding for DuckDuckGo result anchors.
//!
//! Result titles link to `//duckduckgo.com/l/?uddg=<encoded target>&rut=...`
//! rather than to the destination itself. [`decode_link`] recovers the
//! destination and leaves anything else untouched.

use url::Url;

/// Base against which relative and protocol-relative hrefs are resolved.
const REDIRECT_BASE: &str = "https://duckduckgo.com";

/// Query parameter carrying the percent-encoded destination.
const TARGET_PARAM: &str = "uddg";

/// Unwrap a redirect-wrapping href into its destination URL.
///
/// Returns the percent-decoded `uddg` parameter when present, otherwise
/// `raw` unchanged. Parse failures also return `raw` unchanged, so a
/// malformed link is surfaced as-is instead of dropping the result.
///
/// # Examples
///
/// ```
/// use duck_search::link::decode_link;
///
/// let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=abc";
/// assert_eq!(decode_link(href), "https://example.com");
/// assert_eq!(decode_link("https://example.com/a"), "https://example.com/a");
/// ```
pub fn decode_link(raw: &str) -> String {
    let Ok(base) = Url::parse(REDIRECT_BASE) else {
        return raw.to_owned();
    };
    let Ok(parsed) = base.join(raw) else {
        return raw.to_owned();
    };

    parsed
        .query_pairs()
        .find(|(key, _)| key == TARGET_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|target| !target.is_empty())
        .unwrap_or_else(|| raw.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_protocol_relative_redirect() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=abc";
        assert_eq!(decode_link(href), "https://example.com/page");
    }

    #[test]
    fn decodes_plain_target() {
        let href = "https://duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com";
        assert_eq!(decode_link(href), "https://example.com");
    }

    #[test]
    fn decodes_path_relative_redirect() {
        let href = "/l/?kh=-1&uddg=https%3A%2F%2Fdoc.rust-lang.org%2Fbook%2F";
        assert_eq!(decode_link(href), "https://doc.rust-lang.org/book/");
    }

    #[test]
    fn keeps_encoded_query_of_target() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fs%3Fq%3Da%2Bb%26n%3D1";
        assert_eq!(decode_link(href), "https://example.com/s?q=a+b&n=1");
    }

    #[test]
    fn direct_link_returned_unchanged() {
        assert_eq!(
            decode_link("https://example.com/direct"),
            "https://example.com/direct"
        );
    }

    #[test]
    fn unparseable_link_returned_unchanged() {
        assert_eq!(decode_link("http://[::1"), "http://[::1");
    }

    #[test]
    fn empty_link_returned_unchanged() {
        assert_eq!(decode_link(""), "");
    }

    #[test]
    fn idempotent_without_uddg() {
        for raw in [
            "https://example.com/a?b=c",
            "not a url at all",
            "/relative/path",
            "",
        ] {
            let once = decode_link(raw);
            assert_eq!(decode_link(&once), once, "not idempotent for {raw:?}");
        }
    }
}
