//! URL Utility Functions
//!
//! Path handling for the URL-based fallbacks of both cascades.

use chrono::NaiveDate;
use url::Url;

use crate::patterns::URL_DATE;

/// Path component of a source URL, percent-decoded.
///
/// Absolute URLs are parsed properly and their path decoded back to text
/// (`caf%C3%A9` is `café`); sequences that are not valid UTF-8 stay encoded.
/// Anything that does not parse is treated as a bare path with its query and
/// fragment cut off.
///
/// # Example
///
/// ```rust
/// use link_metadata::url_utils::source_path;
///
/// assert_eq!(source_path("https://example.com/blog/post?x=1"), "/blog/post");
/// assert_eq!(source_path("blog/post#top"), "blog/post");
/// assert_eq!(source_path("https://example.com/my post"), "/my post");
/// ```
#[must_use]
pub fn source_path(url_str: &str) -> String {
    let url_str = url_str.trim();

    match Url::parse(url_str) {
        Ok(url) => urlencoding::decode(url.path())
            .map_or_else(|_| url.path().to_string(), |decoded| decoded.into_owned()),
        Err(_) => url_str
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Last non-empty `/`-separated segment of the path, or `""`.
#[must_use]
pub fn last_path_segment(url_str: &str) -> String {
    source_path(url_str)
        .split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .unwrap_or_default()
        .to_string()
}

/// Calendar date encoded as `/YYYY/MM/DD/` in the URL.
///
/// Matches that are not real dates (`/2023/13/45/`) are skipped.
#[must_use]
pub fn date_from_url(url_str: &str) -> Option<NaiveDate> {
    URL_DATE.captures_iter(url_str).find_map(|caps| {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}
