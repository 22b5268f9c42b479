//! Input and result types for metadata extraction.
//!
//! `ExtractionInput` is what the host hands over after fetching a page;
//! `ExtractionResult` is the `{ title?, date }` payload it gets back.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// A fetched page and the URL it was fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionInput {
    html: String,
    source_url: Url,
}

impl ExtractionInput {
    /// Build an input, validating that `source_url` is an absolute
    /// `http`/`https` URL with a host.
    ///
    /// # Example
    ///
    /// ```rust
    /// use link_metadata::ExtractionInput;
    ///
    /// let input = ExtractionInput::new("<title>Hi</title>", "https://example.com/hi")?;
    /// assert_eq!(input.source_url().host_str(), Some("example.com"));
    /// assert!(ExtractionInput::new("", "not a url").is_err());
    /// # Ok::<(), link_metadata::Error>(())
    /// ```
    pub fn new(html: impl Into<String>, source_url: &str) -> Result<Self> {
        let trimmed = source_url.trim();
        let url = Url::parse(trimmed).map_err(|err| Error::InvalidUrl {
            url: source_url.to_string(),
            reason: err.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.host_str().is_none() {
            return Err(Error::InvalidUrl {
                url: source_url.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(Self {
            html: html.into(),
            source_url: url,
        })
    }

    /// Raw page text.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The validated source URL.
    #[must_use]
    pub fn source_url(&self) -> &Url {
        &self.source_url
    }
}

/// Which step of the title cascade produced the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    /// `<meta property="og:title">`
    OpenGraph,
    /// `<title>` element.
    TitleElement,
    /// First `<h1>` element.
    Heading,
    /// Guessed from the last URL path segment.
    Url,
}

impl TitleSource {
    /// True when no markup carried a title and it was guessed from the URL.
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Url)
    }
}

/// Which step of the date cascade produced the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSource {
    /// schema.org `"datePublished"` field.
    JsonLd,
    /// `<meta property="article:published_time">`
    OpenGraph,
    /// `<meta name="date">`
    MetaDate,
    /// `<time datetime>`
    TimeElement,
    /// Bare `NNNN-NN-NN` / `NNNN/NN/NN` text.
    NumericText,
    /// `/YYYY/MM/DD/` in the source URL.
    Url,
    /// Nothing found; the extraction date was used.
    Today,
}

impl DateSource {
    /// True when the date is the extraction date rather than page data.
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Today)
    }
}

/// Title and publication date extracted from a page.
///
/// Serializes to the `{ "title"?: ..., "date": ... }` payload handed back to
/// the host; the cascade sources are kept out of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Best-effort title. `None` when every source, the URL included, was empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date formatted as `YYYY-MM-DD`.
    pub date: String,

    /// Cascade step the title came from.
    #[serde(skip)]
    pub title_source: TitleSource,

    /// Cascade step the date came from.
    #[serde(skip)]
    pub date_source: DateSource,
}

impl ExtractionResult {
    /// Publication year, used by hosts that file links under a per-year category.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    /// True when either value came from a last-resort fallback and may
    /// deserve a human look.
    #[must_use]
    pub fn needs_review(&self) -> bool {
        self.title.is_none() || self.title_source.is_fallback() || self.date_source.is_fallback()
    }
}
