// src/users/report.rs
//! Serializable rendering of a validation outcome.

use serde::{Serialize, Serializer};

use crate::common::{FieldError, Outcome};

/// Either the validated value or every violation, ready for JSON output.
///
/// The `valid` key is derived from the variant when serializing:
///
/// ```json
/// { "valid": false, "errors": [{ "field": "email", "code": "MISSING_AT", "message": "..." }] }
/// ```
#[derive(Debug)]
pub enum ValidationReport<T> {
    Accepted(T),
    Rejected(Vec<FieldError>),
}

/// Wire shape of a report
#[derive(Serialize)]
struct ReportBody<'a, T> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl<T> ValidationReport<T> {
    pub fn from_outcome(outcome: Outcome<FieldError, T>) -> Self {
        outcome.fold(
            |errors| ValidationReport::Rejected(errors.into_vec()),
            ValidationReport::Accepted,
        )
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationReport::Accepted(_))
    }

    /// Messages in report order; empty when accepted
    pub fn messages(&self) -> Vec<&str> {
        match self {
            ValidationReport::Accepted(_) => Vec::new(),
            ValidationReport::Rejected(errors) => {
                errors.iter().map(|error| error.message.as_str()).collect()
            }
        }
    }
}

impl<T: Serialize> Serialize for ValidationReport<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let body = match self {
            ValidationReport::Accepted(value) => ReportBody {
                valid: true,
                value: Some(value),
                errors: None,
            },
            ValidationReport::Rejected(errors) => ReportBody {
                valid: false,
                value: None,
                errors: Some(errors.as_slice()),
            },
        };
        body.serialize(serializer)
    }
}

impl<T> From<Outcome<FieldError, T>> for ValidationReport<T> {
    fn from(outcome: Outcome<FieldError, T>) -> Self {
        Self::from_outcome(outcome)
    }
}
