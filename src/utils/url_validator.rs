//! Validation for URLs submitted for shortening.
//!
//! The submitted string is stored verbatim and later sent back as the
//! `Location` header, so it must already be a legal header value. This module
//! only decides whether it is acceptable as a redirect target.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Empty,

    #[error("URL may only contain printable ASCII characters")]
    InvalidCharacters,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// # Rules
///
/// 1. **Non-empty**: blank input is rejected
/// 2. **Characters**: printable ASCII only; no whitespace or control bytes
/// 3. **Absolute**: relative references fail to parse
/// 4. **Protocol**: only `http` and `https`
/// 5. **Host**: must be present
///
/// The parser silently strips tabs and newlines and percent-encodes other
/// bytes, so the character rule is checked on the raw input.
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and similar schemes so the
/// redirect endpoint cannot be used to deliver them.
///
/// # Errors
///
/// Returns the first rule the input violates.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
/// assert_eq!(validate_url("ftp://example.com"), Err(UrlValidationError::UnsupportedProtocol));
/// ```
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if !input.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(UrlValidationError::InvalidCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}
