//! Error types for the originality crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys or other credentials appear in
//! error messages.

/// Errors that can occur during originality check operations.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// An HTTP request to a search provider failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to decode a search provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The submission archive could not be read.
    #[error("archive error: {0}")]
    Archive(String),

    /// Invalid check configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The verdict could not be recorded.
    #[error("sink error: {0}")]
    Sink(String),
}

/// Convenience type alias for originality results.
pub type Result<T> = std::result::Result<T, CheckError>;
