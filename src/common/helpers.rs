// Helper functions for diagnostics and safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// use validation_engine::common::safe_email_log;
///
/// assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if email.len() > 3 && !domain.contains('@') => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***@***.***".to_string(),
    }
}

/// Renders a raw input for an error message.
///
/// Present values are single-quoted verbatim, absent ones print as `null`.
pub fn describe_raw(raw: Option<&str>) -> String {
    match raw {
        Some(value) => format!("'{}'", value),
        None => "null".to_string(),
    }
}
