//! Error types for seedinfo.
//!
//! Page extraction itself never fails: a missing field becomes `None`.
//! These errors cover the fallible edges around it (base URLs, seed lists,
//! option files and I/O).

/// Error type for seedinfo operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A URL could not be parsed or is not an absolute http(s) URL.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl {
        /// The offending input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Reading a page, seed list or options file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed (seed lists, option files, records).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for seedinfo operations.
pub type Result<T> = std::result::Result<T, Error>;
