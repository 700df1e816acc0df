//! Repository trait for the shortcode registry.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRecordRepository: Send + Sync {
    /// Registers a record and creates its empty click log.
    ///
    /// The existence check and the insert are a single atomic step: two
    /// concurrent inserts of the same shortcode never both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the shortcode is already registered,
    /// whether or not that record has expired. Nothing is modified in that case.
    async fn insert(&self, record: UrlRecord) -> Result<(), AppError>;

    /// Finds a record by shortcode, expired or not.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if registered
    /// - `Ok(None)` if no record was ever created for the shortcode
    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Counts registered records, including expired ones.
    async fn count_records(&self) -> Result<usize, AppError>;
}
