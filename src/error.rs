//! Error types for rs-readability.
//!
//! This module defines the error types returned by extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL passed to the fetch entry point could not be parsed
    /// or uses an unsupported scheme.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The fetched response body was not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    DecodingFailed,

    /// The HTML could not be parsed, or no readable content survived scoring.
    #[error("no readable content found in document")]
    ParsingFailed,

    /// Transport or other unexpected failure.
    #[error("extraction failed: {0}")]
    Unknown(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
