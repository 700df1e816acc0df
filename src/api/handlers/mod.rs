//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;

use crate::error::AppError;
use crate::infrastructure::logging::{EventLogger, LogComponent, LogLevel};

/// Mirrors a failed request into the application event log.
///
/// Internal errors are logged at `error`, everything else at `warn`.
pub(crate) fn log_failure(logger: &dyn EventLogger, action: &str, err: &AppError) {
    let level = match err {
        AppError::Internal { .. } => LogLevel::Error,
        _ => LogLevel::Warn,
    };

    logger.log(level, LogComponent::Handler, &format!("{action}: {err}"));
}
