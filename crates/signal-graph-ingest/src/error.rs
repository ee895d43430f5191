//! Error types for signal-graph-ingest.

use thiserror::Error;

/// Top-level error type for acquisition and persistence operations.
#[derive(Debug, Error)]
pub enum IngestError {
    /// HTTP request failure (connect, timeout, non-success status).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed payload could not be parsed as RSS/Atom.
    #[error("feed parse error: {0}")]
    Feed(String),

    /// HTML fallback selector or document problem.
    #[error("scrape error: {0}")]
    Scrape(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;
