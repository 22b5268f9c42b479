//! Error types for link-metadata.
//!
//! Extraction itself never fails. The only fallible step is validating the
//! source URL handed over at the input boundary.

/// Error type for input validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source URL could not be parsed as an absolute URL with a host.
    #[error("invalid source URL {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected URL as supplied.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The source URL parsed but does not use `http` or `https`.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Result type alias for input validation.
pub type Result<T> = std::result::Result<T, Error>;
