//! Error types for flag-days operations.

use thiserror::Error;

/// Errors raised by the text-consuming entry points (date parsing, JSON
/// catalog definitions, recurrence expansion). Queries never fail.
#[derive(Error, Debug)]
pub enum FlagDayError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid RRULE: {0}")]
    InvalidRule(String),

    /// A catalog definition entry could not be turned into a flag day.
    /// `index` is the 0-based position in the definition array.
    #[error("Invalid flag day definition at index {index}: {message}")]
    Definition { index: usize, message: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlagDayError>;
