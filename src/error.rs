//! Errors raised by the I/O and validation collaborators
//!
//! The comparison engine itself never fails on a well-typed household;
//! these errors come from loading files and from range validation.

use thiserror::Error;

/// Errors that can occur while loading inputs or assumptions
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// Underlying file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV row or header
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A household field is outside its documented range
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Assumption file names a key the engine does not know
    #[error("Unknown assumption key: {0}")]
    UnknownAssumption(String),

    /// Assumption value could not be parsed or is out of range
    #[error("Invalid value for assumption `{key}`: {reason}")]
    InvalidAssumption { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ComparisonError>;
