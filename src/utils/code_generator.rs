//! Shortcode generation and validation utilities.
//!
//! Generated codes are short random alphanumeric strings; caller-supplied
//! codes are checked against a conservative character set and the route
//! words the router already uses.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use serde_json::json;

/// Length of a freshly generated shortcode.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Longest code the generator grows to after repeated collisions.
pub const MAX_GENERATED_CODE_LENGTH: usize = 10;

/// Longest caller-supplied shortcode accepted.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 32;

/// Codes that would shadow fixed routes.
const RESERVED_CODES: &[&str] = &["shorturls", "health"];

/// Generates a random alphanumeric code of `length` characters.
///
/// Draws from `[A-Za-z0-9]` (62 symbols) using the thread-local CSPRNG.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a caller-supplied shortcode.
///
/// # Rules
///
/// - Length: 1-32 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Shortcode must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Shortcode can only contain letters, digits, hyphens and underscores",
            json!({ "shortcode": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This shortcode is reserved",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}
