//! Error types for ListTree
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ListTree operations
pub type ListTreeResult<T> = Result<T, ListTreeError>;

/// Main error type for ListTree operations
#[derive(Error, Debug)]
pub enum ListTreeError {
    /// Input list is empty or otherwise unusable
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Two grouped rows ended up with the same path
    #[error("structural collision: more than one row resolves to '{path}'")]
    StructuralCollision { path: String },

    /// Dot-space prefix segment is empty or not purely numeric
    #[error("malformed dot-space prefix '{prefix}' on line {line}")]
    MalformedDotSpacePrefix { line: usize, prefix: String },

    /// Two raw items collapse to the same node while duplicates are rejected
    #[error("duplicate entry '{path}' (items {first} and {second})")]
    DuplicateEntry {
        path: String,
        first: usize,
        second: usize,
    },

    /// Keyword filter was called without keywords
    #[error("at least one keyword is required")]
    NoKeywords,

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ListTreeError {
    /// The report emitted for an empty item list.
    pub fn empty_input() -> Self {
        ListTreeError::InvalidInput {
            reason: "nonempty list required".to_string(),
        }
    }
}
