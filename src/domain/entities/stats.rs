//! Aggregated statistics for a single shortcode.

use super::{ClickEvent, UrlRecord};

/// A record together with its full click history.
///
/// `clicks` is in append order, which is also chronological order.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub record: UrlRecord,
    pub total_clicks: usize,
    pub clicks: Vec<ClickEvent>,
}

impl UrlStats {
    pub fn new(record: UrlRecord, clicks: Vec<ClickEvent>) -> Self {
        Self {
            record,
            total_clicks: clicks.len(),
            clicks,
        }
    }
}
