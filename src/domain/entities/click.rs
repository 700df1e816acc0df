//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// Referrer recorded when the request carries no `Referer` header.
pub const DEFAULT_REFERRER: &str = "Direct";

/// User agent recorded when the request carries no `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = "Unknown";

/// A click recorded when a shortcode redirect succeeds.
///
/// Events are append-only: once stored in a shortcode's log they are never
/// edited or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub user_agent: String,
    pub source_ip: String,
    pub location: String,
}

impl ClickEvent {
    /// Stamps a pending click with the time it was appended.
    pub fn from_new(new_click: NewClick, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            referrer: new_click.referrer,
            user_agent: new_click.user_agent,
            source_ip: new_click.source_ip,
            location: new_click.location,
        }
    }
}

/// Input data for recording a click.
///
/// The timestamp is assigned by the store at append time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub referrer: String,
    pub user_agent: String,
    pub source_ip: String,
    pub location: String,
}

impl NewClick {
    /// Builds a click from raw request metadata.
    ///
    /// Missing or blank `referrer` / `user_agent` fall back to
    /// [`DEFAULT_REFERRER`] and [`DEFAULT_USER_AGENT`].
    pub fn new(
        referrer: Option<&str>,
        user_agent: Option<&str>,
        source_ip: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            referrer: non_blank(referrer).unwrap_or(DEFAULT_REFERRER).to_string(),
            user_agent: non_blank(user_agent)
                .unwrap_or(DEFAULT_USER_AGENT)
                .to_string(),
            source_ip: source_ip.into(),
            location: location.into(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
