//! Lenient date-string parsing.
//!
//! Turns whatever a page put in a date attribute into a calendar date. The
//! date is taken as written: `2024-01-15T23:30:00-05:00` is the 15th, not
//! the 16th in UTC.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::patterns::ISO_DATE_PREFIX;

/// Date-time layouts tried after RFC 3339, most specific first.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Layouts without an offset.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y-%m/%d",
    "%Y/%m-%d",
    "%B %d, %Y",  // January 15, 2024
    "%b %d, %Y",  // Jan 15, 2024
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",   // 15 January 2024
    "%d %b %Y",
    "%A, %B %d, %Y",
];

/// Years that can be written as a four-digit `YYYY`. Two-digit years
/// (`15 Jan 24`) and signed years (`-0044`) fall outside.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 100..=9999;

/// Parse a date or date-time string into its calendar date.
///
/// Returns `None` when nothing sensible can be read from the string, or when
/// the year would not fit `YYYY`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use link_metadata::metadata::parse_date;
///
/// assert_eq!(parse_date("2024-01-15T10:30:00Z"), NaiveDate::from_ymd_opt(2024, 1, 15));
/// assert_eq!(parse_date("March 3, 2021"), NaiveDate::from_ymd_opt(2021, 3, 3));
/// assert_eq!(parse_date("yesterday-ish"), None);
/// assert_eq!(parse_date("-0044-03-15"), None);
/// ```
#[must_use]
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    parse_any(date_str).filter(|date| YEAR_RANGE.contains(&date.year()))
}

fn parse_any(date_str: &str) -> Option<NaiveDate> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(date_str, fmt) {
            return Some(dt.date_naive());
        }
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, fmt) {
            return Some(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(date_str) {
        return Some(dt.date_naive());
    }

    // Odd suffixes (`+0000 (UTC)`, `CEST`) after an otherwise clean ISO date
    let caps = ISO_DATE_PREFIX.captures(date_str)?;
    NaiveDate::from_ymd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
}

/// `YYYY-MM-DD`, zero-padded.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
