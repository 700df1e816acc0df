//! DTOs for short URL statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::UrlStats;

/// Statistics for a single shortcode.
///
/// Includes record metadata, total click count, and every click in
/// chronological order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub original_url: String,
    pub created: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub total_clicks: usize,
    pub clicks: Vec<ClickInfo>,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            shortcode: stats.record.shortcode,
            original_url: stats.record.original_url,
            created: stats.record.created_at,
            expiry: stats.record.expires_at,
            total_clicks: stats.total_clicks,
            clicks: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
