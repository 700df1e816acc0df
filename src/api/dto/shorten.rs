//! DTOs for the short URL creation endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::NewUrlRecord;

/// Compiled regex for requested shortcode characters. Empty is allowed.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").expect("shortcode pattern is valid"));

/// Request to create a short URL.
///
/// Unknown fields are ignored. A missing `url` deserializes to an empty
/// string so it is reported as "URL is required" rather than a JSON error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// The original URL (absolute HTTP/HTTPS).
    #[serde(default)]
    pub url: String,

    /// Lifetime in minutes (defaults to the configured validity).
    #[validate(range(min = 1, max = 525_600, message = "Validity must be between 1 and 525600 minutes"))]
    pub validity: Option<i64>,

    /// Preferred shortcode. Empty means "generate one".
    #[validate(length(max = 32, message = "Shortcode must be 1-32 characters"))]
    #[validate(regex(
        path = "*SHORTCODE_REGEX",
        message = "Shortcode can only contain letters, digits, hyphens and underscores"
    ))]
    pub shortcode: Option<String>,
}

impl From<CreateShortUrlRequest> for NewUrlRecord {
    fn from(request: CreateShortUrlRequest) -> Self {
        Self {
            url: request.url,
            validity_minutes: request.validity,
            shortcode: request.shortcode,
        }
    }
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}
