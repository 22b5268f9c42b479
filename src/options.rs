//! Configuration options for metadata extraction.

use chrono::{Local, NaiveDate};

/// Configuration options for metadata extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use link_metadata::Options;
///
/// // Pin "today" so the final date fallback is reproducible
/// let options = Options {
///     reference_date: NaiveDate::from_ymd_opt(2024, 3, 1),
///     ..Options::default()
/// };
/// assert!(options.reference_date.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Date used when no date can be found in the page or its URL.
    ///
    /// When `None`, the current local date at extraction time is used.
    ///
    /// Default: `None`
    pub reference_date: Option<NaiveDate>,
}

impl Options {
    /// The date the final fallback resolves to.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_reference_date() {
        assert_eq!(Options::default().reference_date, None);
    }

    #[test]
    fn reference_date_overrides_today() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 29);
        let options = Options { reference_date: date };
        assert_eq!(Some(options.today()), date);
    }
}
