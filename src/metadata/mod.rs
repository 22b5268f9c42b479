//! Metadata extraction module.
//!
//! Two independent cascades, title and publication date. Each is an ordered
//! slice of `(source, matcher)` pairs; [`first_match`] runs them and stops at
//! the first matcher that returns a value.

pub mod date;
pub mod date_parse;
pub mod title;

use chrono::NaiveDate;
use dom_query::Document;

use crate::result::{DateSource, ExtractionResult, TitleSource};
use crate::Options;

pub use date::extract_date_from_html;
pub use date_parse::{format_date, parse_date};
pub use title::{extract_title_from_doc, title_from_url};

/// A single cascade step: looks at the context and maybe finds a value.
pub type Matcher<C, T> = fn(&C) -> Option<T>;

/// Ordered cascade steps, each tagged with the source it represents.
pub type Cascade<'a, C, T, S> = &'a [(S, Matcher<C, T>)];

/// Run `cascade` in order and return the first hit with its source.
pub fn first_match<C, T, S>(ctx: &C, cascade: Cascade<'_, C, T, S>) -> Option<(S, T)>
where
    S: Copy + std::fmt::Debug,
{
    cascade.iter().find_map(|&(source, matcher)| match matcher(ctx) {
        Some(value) => {
            tracing::debug!(?source, "cascade step matched");
            Some((source, value))
        }
        None => {
            tracing::trace!(?source, "cascade step missed");
            None
        }
    })
}

/// Run both cascades over one page.
///
/// The HTML is parsed once for the title cascade; the date cascade works on
/// the raw text.
#[must_use]
pub fn extract_metadata(html: &str, source_url: &str, opts: &Options) -> ExtractionResult {
    let doc = Document::from(html);
    let (title_source, title) = extract_title_from_doc(&doc, source_url);
    let (date_source, date) = extract_date_from_html(html, source_url, opts.today());

    tracing::debug!(
        source_url,
        ?title_source,
        ?date_source,
        title = %title,
        %date,
        "extracted link metadata"
    );

    ExtractionResult {
        title: (!title.is_empty()).then_some(title),
        date: format_date(date),
        title_source,
        date_source,
    }
}

/// Title cascade on its own.
#[must_use]
pub fn extract_title(html: &str, source_url: &str) -> (TitleSource, String) {
    extract_title_from_doc(&Document::from(html), source_url)
}

/// Date cascade on its own.
#[must_use]
pub fn extract_date(html: &str, source_url: &str, opts: &Options) -> (DateSource, NaiveDate) {
    extract_date_from_html(html, source_url, opts.today())
}
