//! # Error Types
//!
//! Encoding itself is infallible; these errors come from
//! restoring persisted encoder state.

/// Errors from wordcoder operations.
#[derive(Debug, thiserror::Error)]
pub enum WordcoderError {
    /// Persisted state is malformed or inconsistent.
    ///
    /// Restoring is all-or-nothing; no partial state is ever returned.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Persisted state was written by a different encoding policy.
    #[error("policy mismatch: expected {expected}, found {found}")]
    UnknownPolicy {
        /// The policy kind of the encoder being restored.
        expected: String,

        /// The policy kind named by the persisted state.
        found: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON codec error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary codec error.
    #[error("binary codec error: {0}")]
    Binary(#[from] bincode::Error),

    /// Parse error (base64, integer, option names, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordcoder operations.
pub type WCResult<T> = core::result::Result<T, WordcoderError>;
