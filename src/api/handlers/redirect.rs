//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderName, header},
    response::Redirect,
};
use std::net::SocketAddr;
use tracing::debug;

use super::log_failure;
use crate::domain::entities::NewClick;
use crate::error::AppError;
use crate::infrastructure::logging::{LogComponent, LogLevel};
use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;

/// Redirects a shortcode to its original URL and records the click.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Resolve the shortcode (unknown → 404, expired → 410)
/// 2. Determine the client IP (peer address, or proxy headers when trusted)
/// 3. Resolve the visitor location; no store lock is held during the lookup
/// 4. Append the click to the ledger
/// 5. Return 307 Temporary Redirect
///
/// A redirect is only sent once its click is stored.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
/// Returns 410 Gone if the shortcode has expired.
pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let logger = state.logger.as_ref();

    let record = state
        .registry
        .resolve(&shortcode)
        .await
        .inspect_err(|e| log_failure(logger, "Redirect refused", e))?;

    let ip = extract_client_ip(&headers, addr, state.behind_proxy);
    let location = state.locator.resolve(&ip).await;

    let click = NewClick::new(
        header_value(&headers, header::REFERER),
        header_value(&headers, header::USER_AGENT),
        ip,
        location,
    );

    state
        .ledger
        .record(&shortcode, click)
        .await
        .inspect_err(|e| log_failure(logger, "Failed to record click", e))?;

    logger.log(
        LogLevel::Info,
        LogComponent::Handler,
        &format!("Click recorded for {shortcode}, redirecting"),
    );
    debug!(%shortcode, target = %record.original_url, "Redirecting");

    Ok(Redirect::temporary(&record.original_url))
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
