//! # Shortcode Ledger
//!
//! A small URL shortening service with expiring shortcodes and per-click
//! analytics, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Shortcode registry and click ledger
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store, geolocation, event logging
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Custom or generated shortcodes with collision fallback
//! - Per-link validity window (default 30 minutes); expired links answer 410
//! - Click analytics with referrer, user agent, IP and location
//! - Optional remote event log sink
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8080"
//! cargo run
//!
//! curl -X POST localhost:8080/shorturls \
//!   -H 'Content-Type: application/json' \
//!   -d '{"url": "https://example.com", "validity": 60}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ClickLedger, ShortcodeRegistry};
    pub use crate::domain::entities::{ClickEvent, NewClick, NewUrlRecord, UrlRecord, UrlStats};
    pub use crate::error::AppError;
    pub use crate::infrastructure::geo::{FixedIpLocator, HttpIpLocator, IpLocator};
    pub use crate::infrastructure::logging::{EventLogger, RemoteLogger, TracingLogger};
    pub use crate::infrastructure::persistence::MemoryStore;
    pub use crate::state::AppState;
}
