//! Handler for short URL creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use super::log_failure;
use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::error::AppError;
use crate::infrastructure::logging::{LogComponent, LogLevel};
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 60,          // optional, minutes (default: 30)
///   "shortcode": "promo"     // optional
/// }
/// ```
///
/// If the requested shortcode is taken, a generated one is used instead.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:8080/promo",
///   "expiry": "2025-01-01T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, the URL is
/// missing or invalid, the validity is out of range, or the shortcode is
/// malformed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let logger = state.logger.as_ref();

    let Json(payload) = payload
        .map_err(|rejection| {
            AppError::bad_request(
                "Invalid request body",
                json!({ "reason": rejection.body_text() }),
            )
        })
        .inspect_err(|e| log_failure(logger, "Rejected create request", e))?;

    payload
        .validate()
        .map_err(AppError::from)
        .inspect_err(|e| log_failure(logger, "Rejected create request", e))?;

    let record = state
        .registry
        .create(payload.into())
        .await
        .inspect_err(|e| log_failure(logger, "Failed to create short URL", e))?;

    logger.log(
        LogLevel::Info,
        LogComponent::Handler,
        &format!(
            "Created short URL {} for {}",
            record.shortcode, record.original_url
        ),
    );

    let short_link = state.registry.short_link(&state.base_url, &record.shortcode);

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            short_link,
            expiry: record.expires_at,
        }),
    ))
}
