// Common validation types and traits

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::outcome::Outcome;

/// Machine-readable kind of a field violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Email missing or without `@`
    MissingAt,
    /// Blank, absent or too long text
    LengthOutOfRange,
    /// Not a `YYYY-MM-DD` calendar date
    InvalidDate,
    /// Batch is empty or exceeds its size limit
    BatchSize,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingAt => "MISSING_AT",
            ErrorCode::LengthOutOfRange => "LENGTH_OUT_OF_RANGE",
            ErrorCode::InvalidDate => "INVALID_DATE",
            ErrorCode::BatchSize => "BATCH_SIZE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field violation.
///
/// `message` is the human-readable text and already embeds the offending
/// raw value; `field` is the key of the input it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code,
            message: message.into(),
        }
    }

    /// Re-roots the field under `prefix[index]`, e.g. `users[2].email`
    pub fn at_index(self, prefix: &str, index: usize) -> Self {
        Self {
            field: format!("{}[{}].{}", prefix, index, self.field),
            ..self
        }
    }
}

/// Converts raw request data into a validated value
pub trait Validator<T> {
    type Output;

    fn validate(&self, data: &T) -> Outcome<FieldError, Self::Output>;
}
