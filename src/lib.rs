//! # link-metadata
//!
//! Best-effort title and publication date extraction for catalogs of
//! external links.
//!
//! Given the HTML of a fetched page and the URL it came from, the extractor
//! runs two independent cascades of heuristics and returns a title (if any
//! could be found) and a publication date (always, falling back to today).
//! Fetching the page is the caller's job; nothing here performs I/O.
//!
//! ## Quick Start
//!
//! ```rust
//! use link_metadata::{extract_date, extract_title};
//!
//! let html = r#"<html><head>
//!   <meta property="og:title" content="My Article">
//!   <script type="application/ld+json">{"datePublished": "2024-01-15T10:30:00Z"}</script>
//! </head><body></body></html>"#;
//!
//! assert_eq!(extract_title(html, "https://example.com/my-article"), "My Article");
//! assert_eq!(extract_date(html, "https://example.com/my-article"), "2024-01-15");
//! ```
//!
//! ## Cascades
//!
//! - **Title**: `og:title` meta, `<title>`, first `<h1>`, last URL path
//!   segment (`my-great-post` becomes `My Great Post`).
//! - **Date**: schema.org `"datePublished"`, `article:published_time` meta,
//!   `<meta name="date">`, `<time datetime>`, any `NNNN-NN-NN` text,
//!   `/YYYY/MM/DD/` in the URL, today.
//!
//! Malformed markup never causes an error; a step that cannot read it simply
//! misses and the next one runs.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Title and date cascades.
pub mod metadata;

/// URL path helpers for the fallback steps.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{DateSource, ExtractionInput, ExtractionResult, TitleSource};

/// Extracts the title of a page.
///
/// Never fails. Falls back to a guess from the URL path, which is the empty
/// string only when the path itself is empty.
///
/// # Example
///
/// ```rust
/// use link_metadata::extract_title;
///
/// let title = extract_title("<p>no title here</p>", "https://example.com/blog/my-great-post");
/// assert_eq!(title, "My Great Post");
/// ```
#[must_use]
pub fn extract_title(html: &str, source_url: &str) -> String {
    metadata::extract_title(html, source_url).1
}

/// Extracts the publication date of a page as `YYYY-MM-DD`.
///
/// Never fails. When neither the page nor the URL carries a date, the
/// current local date is returned; that is the only time-dependent path.
///
/// # Example
///
/// ```rust
/// use link_metadata::extract_date;
///
/// let date = extract_date("<p>no date here</p>", "https://example.com/2023/07/15/my-post");
/// assert_eq!(date, "2023-07-15");
/// ```
#[must_use]
pub fn extract_date(html: &str, source_url: &str) -> String {
    let (_, date) = metadata::extract_date(html, source_url, &Options::default());
    metadata::format_date(date)
}

/// Extracts title and date with default options.
///
/// # Example
///
/// ```rust
/// use link_metadata::{extract, DateSource, TitleSource};
///
/// let html = "<html><head><title>Hello</title></head><body>2020/05/06</body></html>";
/// let result = extract(html, "https://example.com/hello");
/// assert_eq!(result.title.as_deref(), Some("Hello"));
/// assert_eq!(result.title_source, TitleSource::TitleElement);
/// assert_eq!(result.date, "2020-05-06");
/// assert_eq!(result.date_source, DateSource::NumericText);
/// ```
#[must_use]
pub fn extract(html: &str, source_url: &str) -> ExtractionResult {
    extract_with_options(html, source_url, &Options::default())
}

/// Extracts title and date with custom options.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use link_metadata::{extract_with_options, Options};
///
/// let options = Options {
///     reference_date: NaiveDate::from_ymd_opt(2024, 3, 1),
///     ..Options::default()
/// };
/// let result = extract_with_options("<p>undated</p>", "https://example.com/post", &options);
/// assert_eq!(result.date, "2024-03-01");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, source_url: &str, options: &Options) -> ExtractionResult {
    metadata::extract_metadata(html, source_url, options)
}

/// Extracts title and date from a validated [`ExtractionInput`].
#[must_use]
pub fn extract_input(input: &ExtractionInput, options: &Options) -> ExtractionResult {
    extract_with_options(input.html(), input.source_url().as_str(), options)
}

/// Extracts title and date from raw body bytes with charset detection.
///
/// The encoding is read from `<meta charset>` or `http-equiv` declarations;
/// pages without one are treated as UTF-8. Invalid characters are replaced
/// with U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use link_metadata::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// let result = extract_bytes(html, "https://example.com/cafe");
/// assert_eq!(result.title.as_deref(), Some("Café"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], source_url: &str) -> ExtractionResult {
    extract_bytes_with_options(html, source_url, &Options::default())
}

/// Extracts title and date from raw body bytes with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], source_url: &str, options: &Options) -> ExtractionResult {
    let text = encoding::decode_html(html);
    extract_with_options(&text, source_url, options)
}
