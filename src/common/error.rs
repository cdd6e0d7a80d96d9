// Error handling types for the engine boundary

use serde::Serialize;
use thiserror::Error;
use tracing::error;

use super::non_empty::NonEmpty;
use super::validation::FieldError;

/// Errors surfaced to callers outside the engine.
///
/// Field violations stay data inside the engine; they only become an
/// `EngineError` once a caller asks for a `Result`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation Error: {0}")]
    Validation(NonEmpty<FieldError>),

    #[error("Invalid Input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "VALIDATION_ERROR",
            EngineError::InvalidInput(_) => "INVALID_INPUT",
            EngineError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<NonEmpty<FieldError>> for EngineError {
    fn from(errors: NonEmpty<FieldError>) -> Self {
        EngineError::Validation(errors)
    }
}

/// JSON error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl From<EngineError> for ErrorResponse {
    fn from(err: EngineError) -> Self {
        let code = err.code().to_string();
        match err {
            EngineError::Validation(errors) => ErrorResponse {
                error: format!("{} field(s) failed validation", errors.len()),
                code,
                details: errors.into_vec(),
            },
            EngineError::InvalidInput(e) => ErrorResponse {
                error: format!("Request body is not valid JSON: {}", e),
                code,
                details: Vec::new(),
            },
            EngineError::Io(e) => {
                error!(error = %e, "Failed to read input");
                ErrorResponse {
                    error: "Input could not be read".to_string(),
                    code,
                    details: Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::validation::ErrorCode;

    #[test]
    fn test_violations_convert_to_validation_error() {
        let mut errors = NonEmpty::single(FieldError::new(
            "email",
            ErrorCode::MissingAt,
            "Email must contain @, found: 'x'",
        ));
        errors.push(FieldError::new(
            "date_of_birth",
            ErrorCode::InvalidDate,
            "Date of birth must be a valid date, found: 'y'",
        ));

        let err = EngineError::from(errors);
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(
            err.to_string(),
            "Validation Error: Email must contain @, found: 'x', Date of birth must be a valid date, found: 'y'"
        );

        let response = ErrorResponse::from(err);
        assert_eq!(response.details.len(), 2);
        assert_eq!(response.error, "2 field(s) failed validation");
    }

    #[test]
    fn test_invalid_json_response_has_no_details() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = ErrorResponse::from(EngineError::from(parse_error));

        assert_eq!(response.code, "INVALID_INPUT");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
    }
}
