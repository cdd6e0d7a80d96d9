// src/lib.rs
//! Applicative validation engine.
//!
//! Validates independent raw inputs into refined domain values and reports
//! every violation at once instead of stopping at the first.
//!
//! ```
//! use validation_engine::users::{validate_user, CreateUserRequest};
//!
//! let request = CreateUserRequest {
//!     email: Some("email".to_string()),
//!     first_name: Some("Stojan".to_string()),
//!     last_name: Some("Anastasov".to_string()),
//!     date_of_birth: Some("1991-10-10".to_string()),
//! };
//!
//! let messages: Vec<String> = validate_user(&request).fold(
//!     |errors| errors.iter().map(|e| e.message.clone()).collect(),
//!     |_| Vec::new(),
//! );
//! assert_eq!(messages, vec!["Email must contain @, found: 'email'".to_string()]);
//! ```

pub mod cli;
pub mod common;
pub mod users;

pub use common::{EngineError, FieldError, NonEmpty, Outcome, Tupled, Validator};
