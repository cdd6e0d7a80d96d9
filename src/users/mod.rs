// src/users/mod.rs

pub mod models;
pub mod report;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use models::*;
pub use report::ValidationReport;
pub use validators::{validate_user, BulkUserValidator, UserValidator};
