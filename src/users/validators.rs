// src/users/validators.rs

use super::models::*;
use crate::common::{
    describe_raw, safe_email_log, ErrorCode, FieldError, Outcome, Tupled, Validator,
};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Largest batch accepted by [`BulkUserValidator`]
pub const MAX_BATCH_SIZE: usize = 100;

// ============================================================================
// Field Validators
// ============================================================================

/// Email must be present and contain `@`.
///
/// The message quotes the raw value (`found: 'email'`); absent input is
/// written unquoted as `found: null`, so it differs from the string `"null"`.
/// The same rendering applies to every field validator here.
pub fn validate_email(raw: Option<&str>) -> Outcome<FieldError, Email> {
    match raw {
        Some(value) if value.contains('@') => Outcome::valid(Email::new(value.to_string())),
        _ => Outcome::invalid(FieldError::new(
            "email",
            ErrorCode::MissingAt,
            format!("Email must contain @, found: {}", describe_raw(raw)),
        )),
    }
}

/// Name must be present, not blank, and shorter than [`Name::MAX_CHARS`] characters.
///
/// `field` is the input key and `label` the human name used in the message.
pub fn validate_name(field: &str, label: &str, raw: Option<&str>) -> Outcome<FieldError, Name> {
    match raw {
        Some(value) if !value.trim().is_empty() && value.chars().count() < Name::MAX_CHARS => {
            Outcome::valid(Name::new(value.to_string()))
        }
        _ => Outcome::invalid(FieldError::new(
            field,
            ErrorCode::LengthOutOfRange,
            format!(
                "{} must be between 1 and {} chars, found: {}",
                label,
                Name::MAX_CHARS,
                describe_raw(raw)
            ),
        )),
    }
}

pub fn validate_first_name(raw: Option<&str>) -> Outcome<FieldError, Name> {
    validate_name("first_name", "First name", raw)
}

pub fn validate_last_name(raw: Option<&str>) -> Outcome<FieldError, Name> {
    validate_name("last_name", "Last name", raw)
}

/// Date of birth must be an ISO `YYYY-MM-DD` calendar date
pub fn validate_date_of_birth(raw: Option<&str>) -> Outcome<FieldError, DateOfBirth> {
    match raw.and_then(parse_iso_date) {
        Some(date) => Outcome::valid(DateOfBirth::new(date)),
        None => Outcome::invalid(FieldError::new(
            "date_of_birth",
            ErrorCode::InvalidDate,
            format!("Date of birth must be a valid date, found: {}", describe_raw(raw)),
        )),
    }
}

// ============================================================================
// Record Validators
// ============================================================================

pub struct UserValidator;

impl Validator<CreateUserRequest> for UserValidator {
    type Output = User;

    fn validate(&self, data: &CreateUserRequest) -> Outcome<FieldError, User> {
        let outcome = (
            validate_email(data.email.as_deref()),
            validate_first_name(data.first_name.as_deref()),
            validate_last_name(data.last_name.as_deref()),
            validate_date_of_birth(data.date_of_birth.as_deref()),
        )
            .tupled()
            .map(|(email, first_name, last_name, date_of_birth)| {
                User::new(email, first_name, last_name, date_of_birth)
            });

        match &outcome {
            Outcome::Valid(user) => {
                debug!(email = %safe_email_log(user.email().as_str()), "User validated");
            }
            Outcome::Invalid(errors) => {
                debug!(violations = errors.len(), "User rejected");
            }
        }

        outcome
    }
}

/// Validates a single request with [`UserValidator`]
pub fn validate_user(data: &CreateUserRequest) -> Outcome<FieldError, User> {
    UserValidator.validate(data)
}

// ============================================================================
// Bulk Operation Validators
// ============================================================================

pub struct BulkUserValidator;

impl Validator<Vec<CreateUserRequest>> for BulkUserValidator {
    type Output = Vec<User>;

    fn validate(&self, data: &Vec<CreateUserRequest>) -> Outcome<FieldError, Vec<User>> {
        if data.is_empty() {
            return Outcome::invalid(FieldError::new(
                "users",
                ErrorCode::BatchSize,
                "At least one user is required",
            ));
        }

        if data.len() > MAX_BATCH_SIZE {
            return Outcome::invalid(FieldError::new(
                "users",
                ErrorCode::BatchSize,
                format!(
                    "Cannot validate more than {} users at once, found: {}",
                    MAX_BATCH_SIZE,
                    data.len()
                ),
            ));
        }

        let outcome: Outcome<FieldError, Vec<User>> = data
            .iter()
            .enumerate()
            .map(|(index, request)| {
                UserValidator
                    .validate(request)
                    .map_err(move |error| error.at_index("users", index))
            })
            .collect();

        info!(
            users = data.len(),
            violations = outcome.errors().map_or(0, |errors| errors.len()),
            "Batch validated"
        );

        outcome
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parses exactly `YYYY-MM-DD`; chrono alone also accepts unpadded fields
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
