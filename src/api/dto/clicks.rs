//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickEvent;

/// Individual click event information.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub user_agent: String,
    pub location: String,
    pub ip: String,
}

impl From<ClickEvent> for ClickInfo {
    fn from(click: ClickEvent) -> Self {
        Self {
            timestamp: click.timestamp,
            referrer: click.referrer,
            user_agent: click.user_agent,
            location: click.location,
            ip: click.source_ip,
        }
    }
}
