//! Click recording and retrieval service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{ClickEvent, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Service owning the append-only click logs.
///
/// Timestamps are assigned by the store when a click is appended, so the
/// events of one shortcode come back in non-decreasing time order.
pub struct ClickLedger<C: ClickRepository> {
    clicks: Arc<C>,
}

impl<C: ClickRepository> ClickLedger<C> {
    pub fn new(clicks: Arc<C>) -> Self {
        Self { clicks }
    }

    /// Appends one click to the log of `shortcode`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `shortcode` has no log.
    pub async fn record(&self, shortcode: &str, click: NewClick) -> Result<ClickEvent, AppError> {
        let event = self.clicks.append(shortcode, click).await?;
        debug!(shortcode, location = %event.location, "Click recorded");
        Ok(event)
    }

    /// All clicks recorded for `shortcode`, oldest first.
    ///
    /// An unknown shortcode yields an empty list.
    pub async fn get_all(&self, shortcode: &str) -> Result<Vec<ClickEvent>, AppError> {
        self.clicks.list(shortcode).await
    }

    /// Number of clicks recorded for `shortcode`; zero when unknown.
    pub async fn count(&self, shortcode: &str) -> Result<usize, AppError> {
        self.clicks.count_clicks(shortcode).await
    }
}
