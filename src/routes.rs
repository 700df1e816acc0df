//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`             - Create a short URL
//! - `GET  /shorturls/{shortcode}` - Statistics for a shortcode
//! - `GET  /health`                - Health check
//! - `GET  /{shortcode}`           - Short link redirect
//!
//! # Middleware
//!
//! - **CORS** - Permissive, the browser front end is served from another origin
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, CORS and request tracing.
///
/// Static routes take precedence over the `/{shortcode}` catch-all, so
/// `shorturls` and `health` can never be served as shortcodes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::shorturl_routes())
        .route("/health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
        .layer(CorsLayer::permissive())
}

/// Constructs the application service: [`router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
