//! Character encoding detection for raw HTTP bodies.
//!
//! Hosts usually hand over the body bytes exactly as fetched. The charset is
//! read from the page's own declaration and the text transcoded to UTF-8
//! before any pattern runs.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How far into the document a charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the declared character encoding of an HTML document.
///
/// Checks `<meta charset>` first, then the `http-equiv` form, within the
/// first 1024 bytes. Unknown or missing labels mean UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE]
        .iter()
        .filter_map(|re| re.captures(&head))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to UTF-8 text.
///
/// Invalid sequences become U+FFFD rather than errors, so this never fails.
///
/// # Examples
///
/// ```
/// use link_metadata::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"iso-8859-1\"><title>Caf\xE9</title></head></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html);
    }

    let (decoded, _, had_errors) = encoding.decode(html);
    tracing::debug!(encoding = encoding.name(), had_errors, "transcoded page to UTF-8");
    decoded
}
