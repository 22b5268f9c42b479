//! Publication date cascade.
//!
//! Matching is textual over the raw page so that scripts, comments and
//! broken markup are searched exactly as served. Each pattern only looks at
//! its first textual match; if that does not parse, the pattern is a miss.

use chrono::NaiveDate;

use super::date_parse::parse_date;
use super::{first_match, Cascade};
use crate::patterns::{DATE_PUBLISHED_JSON, META_TAG, NUMERIC_DATE, TAG_ATTRIBUTE, TIME_TAG};
use crate::result::DateSource;
use crate::url_utils;

/// What the date matchers look at.
#[derive(Debug, Clone, Copy)]
pub struct DateContext<'a> {
    /// Raw page text.
    pub html: &'a str,
    /// URL the page was fetched from.
    pub source_url: &'a str,
}

/// Run the date cascade, falling back to `today`.
#[must_use]
pub fn extract_date_from_html(html: &str, source_url: &str, today: NaiveDate) -> (DateSource, NaiveDate) {
    let ctx = DateContext { html, source_url };

    // `MetaDate`, `TimeElement` and `NumericText` are the generic tier and
    // keep that relative order.
    let cascade: Cascade<'_, DateContext<'_>, NaiveDate, DateSource> = &[
        (DateSource::JsonLd, json_date_published),
        (DateSource::OpenGraph, open_graph_published_time),
        (DateSource::MetaDate, meta_name_date),
        (DateSource::TimeElement, time_datetime),
        (DateSource::NumericText, numeric_text_date),
        (DateSource::Url, url_path_date),
    ];

    if let Some(found) = first_match(&ctx, cascade) {
        return found;
    }

    tracing::debug!(%today, "no date in page or URL, using extraction date");
    (DateSource::Today, today)
}

/// `"datePublished": "..."` from embedded structured data.
fn json_date_published(ctx: &DateContext<'_>) -> Option<NaiveDate> {
    let raw = DATE_PUBLISHED_JSON.captures(ctx.html)?.get(1)?.as_str();
    parse_matched(raw, DateSource::JsonLd)
}

/// `<meta property="article:published_time" content="...">`
fn open_graph_published_time(ctx: &DateContext<'_>) -> Option<NaiveDate> {
    let raw = meta_content(ctx.html, "property", "article:published_time")?;
    parse_matched(&raw, DateSource::OpenGraph)
}

/// `<meta name="date" content="...">`
fn meta_name_date(ctx: &DateContext<'_>) -> Option<NaiveDate> {
    let raw = meta_content(ctx.html, "name", "date")?;
    parse_matched(&raw, DateSource::MetaDate)
}

/// `<time datetime="...">`
fn time_datetime(ctx: &DateContext<'_>) -> Option<NaiveDate> {
    let raw = TIME_TAG
        .find_iter(ctx.html)
        .find_map(|tag| attribute(tag.as_str(), "datetime"))?;
    parse_matched(&raw, DateSource::TimeElement)
}

/// First bare `NNNN-NN-NN` / `NNNN/NN/NN` anywhere in the page.
fn numeric_text_date(ctx: &DateContext<'_>) -> Option<NaiveDate> {
    let raw = NUMERIC_DATE.find(ctx.html)?.as_str().replace('/', "-");
    parse_matched(&raw, DateSource::NumericText)
}

/// `/YYYY/MM/DD/` in the source URL.
fn url_path_date(ctx: &DateContext<'_>) -> Option<NaiveDate> {
    url_utils::date_from_url(ctx.source_url)
}

fn parse_matched(raw: &str, source: DateSource) -> Option<NaiveDate> {
    let parsed = parse_date(raw);
    if parsed.is_none() {
        tracing::debug!(?source, raw, "matched date string did not parse");
    }
    parsed
}

/// `content` of the first `<meta>` whose `key` attribute equals `value`
/// (ASCII case-insensitive).
fn meta_content(html: &str, key: &str, value: &str) -> Option<String> {
    META_TAG.find_iter(html).find_map(|tag| {
        let tag = tag.as_str();
        let matches = attribute(tag, key).is_some_and(|v| v.trim().eq_ignore_ascii_case(value));
        if matches {
            attribute(tag, "content").filter(|c| !c.is_empty())
        } else {
            None
        }
    })
}

/// Value of attribute `name` inside a single tag's text.
fn attribute(tag: &str, name: &str) -> Option<String> {
    TAG_ATTRIBUTE.captures_iter(tag).find_map(|caps| {
        if !caps.get(1)?.as_str().eq_ignore_ascii_case(name) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string())
    })
}
