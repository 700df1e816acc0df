//! Repository trait for the click ledger.

use crate::domain::entities::{ClickEvent, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for per-shortcode click logs.
///
/// Logs are append-only and ordered by arrival.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click to the shortcode's log and returns the stored event.
    ///
    /// The store assigns the timestamp while holding the log, so timestamps
    /// within one log never decrease.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record is registered under
    /// `shortcode`. Clicks are never stored for unknown codes.
    async fn append(&self, shortcode: &str, click: NewClick) -> Result<ClickEvent, AppError>;

    /// Returns a snapshot of the shortcode's log in append order.
    ///
    /// Unknown shortcodes and shortcodes without clicks both yield an empty
    /// vector.
    async fn list(&self, shortcode: &str) -> Result<Vec<ClickEvent>, AppError>;

    /// Counts clicks recorded for the shortcode.
    async fn count_clicks(&self, shortcode: &str) -> Result<usize, AppError>;
}
