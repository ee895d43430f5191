//! Error types for signal-graph-core.
//!
//! The pipeline treats data conditions as degenerate-but-valid: an empty
//! batch, a zero vocabulary, a selection with no ontology matches all
//! produce ordinary results. The variants here exist only for caller
//! contract violations.

use thiserror::Error;

/// Top-level error type for core pipeline operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration is invalid or failed to load.
    #[error("configuration error: {0}")]
    Config(String),

    /// A signal violated the input contract (e.g. blank title).
    ///
    /// This is a caller programming error, not a runtime condition the
    /// pipeline recovers from.
    #[error("invalid signal at index {index}: {reason}")]
    InvalidSignal {
        /// Position of the offending signal in the input batch.
        index: usize,
        /// Description of the violated contract.
        reason: String,
    },
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
