//! URL record entity representing a registered shortcode.

use chrono::{DateTime, Duration, Utc};

/// A shortcode mapped to its original URL.
///
/// Records are immutable once registered. Expiry is derived from
/// `expires_at`; an expired record stays in the registry so its statistics
/// remain queryable, but it no longer redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a record valid for `validity_minutes` after `created_at`.
    pub fn new(
        shortcode: String,
        original_url: String,
        created_at: DateTime<Utc>,
        validity_minutes: i64,
    ) -> Self {
        Self {
            shortcode,
            original_url,
            created_at,
            expires_at: created_at + Duration::minutes(validity_minutes),
        }
    }

    /// Returns true if the record's validity window has passed at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Returns true if the record's validity window has passed.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for registering a new short URL.
///
/// `validity_minutes` and `shortcode` are optional; the registry fills in its
/// default validity and generates a code when they are absent.
#[derive(Debug, Clone, Default)]
pub struct NewUrlRecord {
    pub url: String,
    pub validity_minutes: Option<i64>,
    pub shortcode: Option<String>,
}

impl NewUrlRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_validity(mut self, minutes: i64) -> Self {
        self.validity_minutes = Some(minutes);
        self
    }

    pub fn with_shortcode(mut self, shortcode: impl Into<String>) -> Self {
        self.shortcode = Some(shortcode.into());
        self
    }
}
