// src/users/models.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Raw Request Models
// ============================================================================

/// Untrusted user input. Every field may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    #[serde(alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(alias = "dateOfBirth", alias = "dob")]
    pub date_of_birth: Option<String>,
}

// ============================================================================
// Refined Values
// ============================================================================
//
// Constructors are visible to the `users` module only, so a value of any of
// these types has passed its validator. They serialize but never deserialize.

/// Address that passed the email rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub(super) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-blank name shorter than [`Name::MAX_CHARS`] characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Exclusive upper bound on the character count
    pub const MAX_CHARS: usize = 50;

    pub(super) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar date parsed from `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub(super) fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// ============================================================================
// Validated Record
// ============================================================================

/// A user whose every field passed validation.
///
/// Only [`UserValidator`](super::validators::UserValidator) builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    email: Email,
    first_name: Name,
    last_name: Name,
    date_of_birth: DateOfBirth,
}

impl User {
    pub(super) fn new(
        email: Email,
        first_name: Name,
        last_name: Name,
        date_of_birth: DateOfBirth,
    ) -> Self {
        Self {
            email,
            first_name,
            last_name,
            date_of_birth,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn first_name(&self) -> &Name {
        &self.first_name
    }

    pub fn last_name(&self) -> &Name {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> DateOfBirth {
        self.date_of_birth
    }
}
