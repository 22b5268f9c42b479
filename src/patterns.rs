//! Compiled regex patterns and CSS selectors for metadata extraction.
//!
//! All patterns are compiled once at first use via `LazyLock` and are shared
//! read-only across threads.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Date Patterns (matched against raw page text)
// =============================================================================

/// schema.org `"datePublished": "<value>"` anywhere in the document.
pub static DATE_PUBLISHED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"datePublished"\s*:\s*"([^"]+)""#).expect("DATE_PUBLISHED_JSON regex")
});

/// An opening `<meta ...>` tag.
pub static META_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<meta\b[^>]*>").expect("META_TAG regex")
});

/// An opening `<time ...>` tag.
pub static TIME_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<time\b[^>]*>").expect("TIME_TAG regex")
});

/// A single `name=value` attribute inside a tag, double-, single- or unquoted.
pub static TAG_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("TAG_ATTRIBUTE regex")
});

/// Bare numeric date, `NNNN-NN-NN` or `NNNN/NN/NN`.
///
/// Also matches version strings and phone-like sequences; callers accept that.
pub static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}[-/][0-9]{2}[-/][0-9]{2}").expect("NUMERIC_DATE regex")
});

/// `/YYYY/MM/DD/` inside a URL; the trailing slash may be the end of the path.
pub static URL_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/([0-9]{4})/([0-9]{2})/([0-9]{2})(?:[/?#]|$)").expect("URL_DATE regex")
});

/// Leading `YYYY-MM-DD` of a longer date-time string.
pub static ISO_DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("ISO_DATE_PREFIX regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// CSS Selectors (as strings for use with dom_query)
// =============================================================================

/// Open Graph title tag.
pub const OG_TITLE_SELECTOR: &str = r#"meta[property="og:title"]"#;

/// Document title element.
pub const TITLE_SELECTOR: &str = "title";

/// Top-level heading.
pub const HEADING_SELECTOR: &str = "h1";
