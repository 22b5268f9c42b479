//! DOM Operations Adapter
//!
//! Thin wrappers over the `dom_query` crate used by the title cascade.
//! `html5ever` underneath recovers from any malformed input, so none of
//! these can fail.

use dom_query::{Document, Selection};
use tendril::StrTendril;

use crate::patterns::WHITESPACE_NORMALIZE;

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with whitespace runs collapsed to one space and trimmed.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    let text = text_content(sel);
    WHITESPACE_NORMALIZE.replace_all(&text, " ").trim().to_string()
}

/// First element matching `selector`, if any.
#[must_use]
pub fn first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let sel = doc.select(selector);
    if sel.is_empty() {
        None
    } else {
        Some(sel.first())
    }
}

/// Iterate over each element matching `selector` as its own selection.
pub fn each<'a>(doc: &'a Document, selector: &str) -> impl Iterator<Item = Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect::<Vec<_>>()
        .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first() {
        let doc = Document::from(r#"<div id="a">one</div><div id="b">two</div>"#);
        let div = first(&doc, "div").unwrap();
        assert_eq!(get_attribute(&div, "id"), Some("a".to_string()));
        assert!(first(&doc, "span").is_none());
    }

    #[test]
    fn test_normalized_text_strips_tags_and_entities() {
        let doc = Document::from("<h1>\n  Fish &amp; <em>Chips</em>\n</h1>");
        let h1 = first(&doc, "h1").unwrap();
        assert_eq!(normalized_text(&h1), "Fish & Chips");
    }

    #[test]
    fn test_each_preserves_document_order() {
        let doc = Document::from(r#"<meta name="a"><meta name="b">"#);
        let names: Vec<_> = each(&doc, "meta")
            .filter_map(|m| get_attribute(&m, "name"))
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
