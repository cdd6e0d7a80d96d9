// Common module - shared types and utilities across all modules

pub mod combinators;
pub mod config;
pub mod error;
pub mod helpers;
pub mod non_empty;
pub mod outcome;
pub mod semigroup;
pub mod validation;

// Re-export commonly used types for convenience
pub use combinators::Tupled;
pub use config::CliConfig;
pub use error::{EngineError, ErrorResponse};
pub use helpers::{describe_raw, safe_email_log};
pub use non_empty::NonEmpty;
pub use outcome::Outcome;
pub use semigroup::Semigroup;
pub use validation::{ErrorCode, FieldError, Validator};
