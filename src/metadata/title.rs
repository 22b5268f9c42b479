//! Title cascade.
//!
//! Sources in order of reliability: Open Graph, `<title>`, first `<h1>`,
//! then a guess from the URL. The URL step always produces a value, so the
//! cascade is total.

use dom_query::Document;

use super::{first_match, Cascade};
use crate::dom;
use crate::patterns::{HEADING_SELECTOR, OG_TITLE_SELECTOR, TITLE_SELECTOR};
use crate::result::TitleSource;
use crate::url_utils;

/// Markup-based title matchers, tried in order.
const TITLE_CASCADE: Cascade<'static, Document, String, TitleSource> = &[
    (TitleSource::OpenGraph, open_graph_title),
    (TitleSource::TitleElement, title_element),
    (TitleSource::Heading, first_heading),
];

/// Run the title cascade over a parsed document.
#[must_use]
pub fn extract_title_from_doc(doc: &Document, source_url: &str) -> (TitleSource, String) {
    if let Some(found) = first_match(doc, TITLE_CASCADE) {
        return found;
    }

    let title = title_from_url(source_url);
    tracing::debug!(title = %title, "title guessed from URL path");
    (TitleSource::Url, title)
}

/// `content` of the first `og:title` meta tag that has one, verbatim.
fn open_graph_title(doc: &Document) -> Option<String> {
    dom::each(doc, OG_TITLE_SELECTOR)
        .find_map(|meta| dom::get_attribute(&meta, "content"))
        .filter(|content| !content.trim().is_empty())
}

/// Text of the first `<title>` element.
fn title_element(doc: &Document) -> Option<String> {
    first_text(doc, TITLE_SELECTOR)
}

/// Text of the first `<h1>` element.
fn first_heading(doc: &Document) -> Option<String> {
    first_text(doc, HEADING_SELECTOR)
}

fn first_text(doc: &Document, selector: &str) -> Option<String> {
    let elem = dom::first(doc, selector)?;
    let text = dom::normalized_text(&elem);
    (!text.is_empty()).then_some(text)
}

/// Title guessed from the last path segment: `my-great-post` becomes
/// `My Great Post`.
///
/// # Example
///
/// ```rust
/// use link_metadata::metadata::title_from_url;
///
/// assert_eq!(title_from_url("https://example.com/blog/my-great-post"), "My Great Post");
/// assert_eq!(title_from_url("https://example.com/"), "");
/// ```
#[must_use]
pub fn title_from_url(source_url: &str) -> String {
    let segment = url_utils::last_path_segment(source_url);
    capitalize_words(&segment.replace('-', " "))
}

/// Upper-case the first character of every whitespace-separated word,
/// leaving the rest of each word as it is.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(html: &str, url: &str) -> (TitleSource, String) {
        extract_title_from_doc(&Document::from(html), url)
    }

    #[test]
    fn test_og_title_verbatim() {
        let html = r#"<head><meta property="og:title" content="  Spaced  OG "></head>"#;
        assert_eq!(title(html, "https://e.com/x"), (TitleSource::OpenGraph, "  Spaced  OG ".to_string()));
    }

    #[test]
    fn test_og_title_without_content_is_skipped() {
        let html = r#"<head>
            <meta property="og:title">
            <meta property="og:title" content="Second">
            <title>Doc</title>
        </head>"#;
        assert_eq!(title(html, "https://e.com/x").1, "Second");
    }

    #[test]
    fn test_blank_og_title_falls_through() {
        let html = r#"<head><meta property="og:title" content="   "><title>Doc</title></head>"#;
        assert_eq!(title(html, "https://e.com/x"), (TitleSource::TitleElement, "Doc".to_string()));
    }

    #[test]
    fn test_title_element_decoded_and_collapsed() {
        let html = "<head><title>\n  Fish &amp; Chips\n  | Site </title></head>";
        assert_eq!(title(html, "https://e.com/x").1, "Fish & Chips | Site");
    }

    #[test]
    fn test_empty_title_element_falls_to_heading() {
        let html = "<head><title> </title></head><body><h1>Head <b>line</b></h1><h1>Other</h1></body>";
        assert_eq!(title(html, "https://e.com/x"), (TitleSource::Heading, "Head line".to_string()));
    }

    #[test]
    fn test_url_fallback() {
        assert_eq!(
            title("<p>nothing</p>", "https://example.com/blog/my-great-post"),
            (TitleSource::Url, "My Great Post".to_string())
        );
    }

    #[test]
    fn test_capitalize_words_keeps_tail() {
        assert_eq!(capitalize_words("iOS tips and-tricks"), "IOS Tips And-tricks");
        assert_eq!(capitalize_words("über  cool"), "Über  Cool");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_title_from_url_ignores_query_and_trailing_slash() {
        assert_eq!(title_from_url("https://example.com/news/big-day/?ref=rss"), "Big Day");
        assert_eq!(title_from_url("https://example.com"), "");
    }
}
