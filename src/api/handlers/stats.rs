//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use super::log_failure;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::infrastructure::logging::{LogComponent, LogLevel};
use crate::state::AppState;

/// Retrieves statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Response
///
/// Returns record metadata, the total click count, and every click oldest
/// first. Expired shortcodes still report their statistics.
///
/// ```json
/// {
///   "shortcode": "abc123",
///   "originalUrl": "https://example.com",
///   "created": "2025-01-01T12:00:00Z",
///   "expiry": "2025-01-01T12:30:00Z",
///   "totalClicks": 1,
///   "clicks": [
///     {
///       "timestamp": "2025-01-01T12:05:00Z",
///       "referrer": "Direct",
///       "userAgent": "curl/8.5.0",
///       "location": "Mountain View, California, United States",
///       "ip": "8.8.8.8"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state
        .registry
        .get_stats(&shortcode)
        .await
        .inspect_err(|e| log_failure(state.logger.as_ref(), "Stats lookup failed", e))?;

    state.logger.log(
        LogLevel::Info,
        LogComponent::Handler,
        &format!(
            "Stats retrieved for {shortcode} ({} clicks)",
            stats.total_clicks
        ),
    );

    Ok(Json(StatsResponse::from(stats)))
}
