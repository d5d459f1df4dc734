//! Pattern-based extraction of links and resource references.
//!
//! Extraction is deliberately regex-based rather than DOM-based: the two
//! patterns below are applied to raw page text. This keeps extraction
//! semantics simple and predictable at the cost of the usual tag-matching
//! edge cases of regexes over HTML.

use std::sync::LazyLock;

use regex::Regex;

/// Matches citation markup wrapping a displayed URL on the search-result
/// page; the inner text is the link candidate.
static RESULT_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<cite .*?>(.*?)</cite>").expect("hardcoded pattern is valid"));

/// Matches a quoted reference starting with `http` and ending in `.js`,
/// e.g. `"https://apis.google.com/js/base.js"`.
static RESOURCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(http.[^"']*?\.js)""#).expect("hardcoded pattern is valid"));

/// Pattern used to pull result links out of the search page.
pub fn result_link_pattern() -> &'static Regex {
    &RESULT_LINK_PATTERN
}

/// Pattern used to pull script-resource references out of a page.
pub fn resource_pattern() -> &'static Regex {
    &RESOURCE_PATTERN
}

/// Yield the first capture group of every non-overlapping match of
/// `pattern` in `content`, in document order.
///
/// The iterator is lazy and finite; calling `extract` again on the same
/// input produces an identical sequence. No match yields an empty iterator,
/// never an error.
pub fn extract<'a>(content: &'a str, pattern: &'a Regex) -> impl Iterator<Item = String> + 'a {
    pattern
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .map(|group| group.as_str().to_string())
}
