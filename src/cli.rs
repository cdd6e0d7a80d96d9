// src/cli.rs
//! Input handling for the `validate` binary.
//!
//! A JSON object is validated as one user, a JSON array as a batch. The
//! caller gets back the exit status and the text to print on stdout.

use serde::Serialize;
use std::fs::File;
use std::io::{self, Read};
use tracing::warn;

use crate::common::{CliConfig, EngineError, ErrorResponse, Validator};
use crate::users::{BulkUserValidator, CreateUserRequest, UserValidator, ValidationReport};

/// Input passed validation
pub const EXIT_VALID: i32 = 0;
/// Input decoded but has violations
pub const EXIT_INVALID: i32 = 1;
/// Input could not be read or decoded
pub const EXIT_BAD_INPUT: i32 = 2;

/// Validates the JSON read from `reader` and renders its report.
/// Returns whether the input was valid.
pub fn run<R: Read>(mut reader: R, pretty: bool) -> Result<(bool, String), EngineError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let body: serde_json::Value = serde_json::from_str(&raw)?;

    if body.is_array() {
        let requests: Vec<CreateUserRequest> = serde_json::from_value(body)?;
        let report = ValidationReport::from_outcome(BulkUserValidator.validate(&requests));
        Ok((report.is_valid(), render(&report, pretty)?))
    } else {
        let request: CreateUserRequest = serde_json::from_value(body)?;
        let report = ValidationReport::from_outcome(UserValidator.validate(&request));
        Ok((report.is_valid(), render(&report, pretty)?))
    }
}

/// Runs the validation and maps every result to an exit status and output
pub fn execute<R: Read>(reader: R, pretty: bool) -> Result<(i32, String), EngineError> {
    match run(reader, pretty) {
        Ok((true, rendered)) => Ok((EXIT_VALID, rendered)),
        Ok((false, rendered)) => Ok((EXIT_INVALID, rendered)),
        Err(err) => failure(err, pretty),
    }
}

/// Renders a boundary error as an `ErrorResponse`
pub fn failure(err: EngineError, pretty: bool) -> Result<(i32, String), EngineError> {
    warn!(error = %err, code = err.code(), "Input could not be validated");
    let response = ErrorResponse::from(err);
    Ok((EXIT_BAD_INPUT, render(&response, pretty)?))
}

/// Opens the configured input file, or stdin when none is set
pub fn open_input(config: &CliConfig) -> Result<Box<dyn Read>, EngineError> {
    match &config.input {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin())),
    }
}

pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, EngineError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
        }
    }

    fn execute_str(input: &str) -> (i32, Value) {
        let (code, output) = execute(input.as_bytes(), false).unwrap();
        (code, serde_json::from_str(&output).unwrap())
    }

    #[test]
    fn test_valid_user_exits_zero() {
        let (code, output) = execute_str(
            r#"{"email": "stolea@gmail.com", "firstName": "Stojan",
                "lastName": "Anastasov", "dateOfBirth": "1991-10-10"}"#,
        );

        assert_eq!(code, EXIT_VALID);
        assert_eq!(output["valid"], json!(true));
        assert_eq!(output["value"]["email"], json!("stolea@gmail.com"));
    }

    #[test]
    fn test_invalid_user_exits_one_with_every_message() {
        let (code, output) = execute_str(
            r#"{"email": "", "first_name": "   ", "last_name": "a", "date_of_birth": "10.10.1992"}"#,
        );

        assert_eq!(code, EXIT_INVALID);
        assert_eq!(output["valid"], json!(false));
        let fields: Vec<&str> = output["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|error| error["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["email", "first_name", "date_of_birth"]);
    }

    #[test]
    fn test_array_input_is_validated_as_batch() {
        let (code, output) = execute_str(
            r#"[{"email": "stolea@gmail.com", "first_name": "Stojan",
                 "last_name": "Anastasov", "date_of_birth": "1991-10-10"},
                {"email": "nope", "first_name": "Ana",
                 "last_name": "Lee", "date_of_birth": "1990-01-01"}]"#,
        );

        assert_eq!(code, EXIT_INVALID);
        assert_eq!(output["errors"][0]["field"], json!("users[1].email"));
    }

    #[test]
    fn test_empty_array_reports_batch_size() {
        let (code, output) = execute_str("[]");

        assert_eq!(code, EXIT_INVALID);
        assert_eq!(output["errors"][0]["code"], json!("BATCH_SIZE"));
    }

    #[test]
    fn test_malformed_json_exits_two_with_error_response() {
        let (code, output) = execute_str("{");

        assert_eq!(code, EXIT_BAD_INPUT);
        assert_eq!(output["code"], json!("INVALID_INPUT"));
        assert!(output["error"].as_str().unwrap().starts_with("Request body is not valid JSON"));
        assert!(output.get("details").is_none());
    }

    #[test]
    fn test_wrongly_typed_field_exits_two() {
        let (code, output) = execute_str(r#"{"email": 42}"#);

        assert_eq!(code, EXIT_BAD_INPUT);
        assert_eq!(output["code"], json!("INVALID_INPUT"));
    }

    #[test]
    fn test_unreadable_input_exits_two_with_io_error() {
        let (code, output) = execute(BrokenReader, false).unwrap();
        let output: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(code, EXIT_BAD_INPUT);
        assert_eq!(output["code"], json!("IO_ERROR"));
    }

    #[test]
    fn test_pretty_output_spans_lines() {
        let input = r#"{"email": "x"}"#;
        let (_, compact) = execute(input.as_bytes(), false).unwrap();
        let (_, pretty) = execute(input.as_bytes(), true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&compact).unwrap(),
            serde_json::from_str::<Value>(&pretty).unwrap()
        );
    }

    #[test]
    fn test_open_input_reports_missing_file() {
        let config = CliConfig {
            pretty: false,
            input: Some("does/not/exist.json".into()),
        };

        let err = open_input(&config).err().unwrap();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
