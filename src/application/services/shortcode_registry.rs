//! Shortcode creation, resolution and statistics service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::repositories::{ClickRepository, UrlRecordRepository};
use crate::error::AppError;
use crate::utils::code_generator::{
    GENERATED_CODE_LENGTH, MAX_GENERATED_CODE_LENGTH, generate_code, validate_custom_code,
};
use crate::utils::url_validator::validate_url;

/// Validity applied when the caller does not ask for one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Longest validity accepted (one year).
pub const MAX_VALIDITY_MINUTES: i64 = 525_600;

/// Generation attempts at each code length before growing the length.
const ATTEMPTS_PER_LENGTH: usize = 10;

/// Service owning the shortcode to URL mapping.
///
/// Enforces URL validity, shortcode uniqueness and expiry. Records are never
/// removed; an expired record refuses to resolve but keeps its statistics.
pub struct ShortcodeRegistry<R: UrlRecordRepository, C: ClickRepository> {
    records: Arc<R>,
    clicks: Arc<C>,
    default_validity_minutes: i64,
}

impl<R: UrlRecordRepository, C: ClickRepository> ShortcodeRegistry<R, C> {
    /// Creates a registry with the standard 30 minute default validity.
    pub fn new(records: Arc<R>, clicks: Arc<C>) -> Self {
        Self {
            records,
            clicks,
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
        }
    }

    /// Overrides the validity used when a request carries none.
    pub fn with_default_validity(mut self, minutes: i64) -> Self {
        self.default_validity_minutes = minutes;
        self
    }

    pub fn default_validity_minutes(&self) -> i64 {
        self.default_validity_minutes
    }

    /// Registers a new short URL.
    ///
    /// # Shortcode Selection
    ///
    /// - A requested shortcode is used verbatim when it is free.
    /// - If it is already registered (expired or not), a fresh code is
    ///   generated instead and the request still succeeds.
    /// - Generated codes start at 6 characters; after 10 collisions at one
    ///   length the length grows by one, up to 10 characters.
    ///
    /// The record and its empty click log are created in one store operation,
    /// so a failed call registers nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is empty, relative, or not http/https
    /// - Validity is outside 1..=525600 minutes
    /// - Requested shortcode is malformed or reserved
    ///
    /// Returns [`AppError::Internal`] if no free code was found.
    pub async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        validate_url(&new_record.url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "url": new_record.url }))
        })?;

        let validity = self.validity_minutes(new_record.validity_minutes)?;

        let requested = new_record.shortcode.filter(|code| !code.is_empty());
        if let Some(code) = &requested {
            validate_custom_code(code)?;
        }

        let created_at = Utc::now();

        if let Some(code) = requested {
            let record = UrlRecord::new(code, new_record.url.clone(), created_at, validity);

            match self.records.insert(record.clone()).await {
                Ok(()) => {
                    info!(shortcode = %record.shortcode, "Short URL created with requested shortcode");
                    return Ok(record);
                }
                Err(AppError::Conflict { .. }) => {
                    warn!(
                        shortcode = %record.shortcode,
                        "Requested shortcode already exists, generating a new one"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        let record = self
            .insert_generated(new_record.url, created_at, validity)
            .await?;
        info!(shortcode = %record.shortcode, "Short URL created");

        Ok(record)
    }

    /// Resolves a shortcode for redirection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode was never registered.
    /// Returns [`AppError::Expired`] if its validity window has passed; the
    /// record itself is kept.
    pub async fn resolve(&self, shortcode: &str) -> Result<UrlRecord, AppError> {
        let record = self.find(shortcode).await?;

        let now = Utc::now();
        if record.is_expired_at(now) {
            debug!(shortcode, "Refusing to resolve expired shortcode");
            return Err(AppError::expired(
                "Short URL has expired",
                json!({ "shortcode": shortcode, "expired_at": record.expires_at }),
            ));
        }

        Ok(record)
    }

    /// Retrieves a record with its click history.
    ///
    /// Available whether or not the record has expired.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode was never registered.
    pub async fn get_stats(&self, shortcode: &str) -> Result<UrlStats, AppError> {
        let record = self.find(shortcode).await?;
        let clicks = self.clicks.list(shortcode).await?;

        Ok(UrlStats::new(record, clicks))
    }

    /// Builds the public short link for a shortcode.
    pub fn short_link(&self, base_url: &str, shortcode: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), shortcode)
    }

    async fn find(&self, shortcode: &str) -> Result<UrlRecord, AppError> {
        self.records
            .find_by_shortcode(shortcode)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "shortcode": shortcode }))
            })
    }

    fn validity_minutes(&self, requested: Option<i64>) -> Result<i64, AppError> {
        let minutes = requested.unwrap_or(self.default_validity_minutes);

        if !(1..=MAX_VALIDITY_MINUTES).contains(&minutes) {
            return Err(AppError::bad_request(
                format!("Validity must be between 1 and {MAX_VALIDITY_MINUTES} minutes"),
                json!({ "validity": minutes }),
            ));
        }

        Ok(minutes)
    }

    /// Generates and inserts a fresh code.
    ///
    /// Bounded: at most `ATTEMPTS_PER_LENGTH` tries for each length from
    /// `GENERATED_CODE_LENGTH` to `MAX_GENERATED_CODE_LENGTH`.
    async fn insert_generated(
        &self,
        url: String,
        created_at: DateTime<Utc>,
        validity: i64,
    ) -> Result<UrlRecord, AppError> {
        for length in GENERATED_CODE_LENGTH..=MAX_GENERATED_CODE_LENGTH {
            for _ in 0..ATTEMPTS_PER_LENGTH {
                let record =
                    UrlRecord::new(generate_code(length), url.clone(), created_at, validity);

                match self.records.insert(record.clone()).await {
                    Ok(()) => return Ok(record),
                    Err(AppError::Conflict { .. }) => continue,
                    Err(e) => return Err(e),
                }
            }

            warn!(length, "Too many shortcode collisions, growing code length");
        }

        Err(AppError::internal(
            "Failed to generate unique shortcode",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ClickEvent, NewClick};
    use crate::domain::repositories::{MockClickRepository, MockUrlRecordRepository};
    use chrono::Duration;

    fn create_test_record(code: &str, url: &str) -> UrlRecord {
        UrlRecord::new(code.to_string(), url.to_string(), Utc::now(), 30)
    }

    fn create_expired_record(code: &str) -> UrlRecord {
        UrlRecord::new(
            code.to_string(),
            "https://example.com".to_string(),
            Utc::now() - Duration::minutes(10),
            1,
        )
    }

    fn registry(
        records: MockUrlRecordRepository,
        clicks: MockClickRepository,
    ) -> ShortcodeRegistry<MockUrlRecordRepository, MockClickRepository> {
        ShortcodeRegistry::new(Arc::new(records), Arc::new(clicks))
    }

    #[tokio::test]
    async fn test_create_generated_shortcode() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records
            .expect_insert()
            .withf(|record| {
                record.shortcode.len() == 6
                    && record.shortcode.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = registry(mock_records, MockClickRepository::new());

        let record = service
            .create(NewUrlRecord::new("https://example.com"))
            .await
            .unwrap();

        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.expires_at - record.created_at, Duration::minutes(30));
    }

    #[tokio::test]
    async fn test_create_keeps_url_verbatim() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records.expect_insert().times(1).returning(|_| Ok(()));

        let service = registry(mock_records, MockClickRepository::new());

        let url = "HTTPS://Example.COM:443/Path?q=1#frag";
        let record = service.create(NewUrlRecord::new(url)).await.unwrap();

        assert_eq!(record.original_url, url);
    }

    #[tokio::test]
    async fn test_create_with_requested_shortcode() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records
            .expect_insert()
            .withf(|record| record.shortcode == "mycode")
            .times(1)
            .returning(|_| Ok(()));

        let service = registry(mock_records, MockClickRepository::new());

        let record = service
            .create(NewUrlRecord::new("https://example.com").with_shortcode("mycode"))
            .await
            .unwrap();

        assert_eq!(record.shortcode, "mycode");
    }

    #[tokio::test]
    async fn test_create_requested_shortcode_collision_falls_back() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records
            .expect_insert()
            .withf(|record| record.shortcode == "taken")
            .times(1)
            .returning(|record| {
                Err(AppError::conflict(
                    "Shortcode already exists",
                    json!({ "shortcode": record.shortcode }),
                ))
            });
        mock_records
            .expect_insert()
            .withf(|record| record.shortcode != "taken")
            .times(1)
            .returning(|_| Ok(()));

        let service = registry(mock_records, MockClickRepository::new());

        let record = service
            .create(NewUrlRecord::new("https://example.com").with_shortcode("taken"))
            .await
            .unwrap();

        assert_ne!(record.shortcode, "taken");
        assert_eq!(record.shortcode.len(), 6);
    }

    #[tokio::test]
    async fn test_create_empty_requested_shortcode_generates() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records
            .expect_insert()
            .withf(|record| record.shortcode.len() == 6)
            .times(1)
            .returning(|_| Ok(()));

        let service = registry(mock_records, MockClickRepository::new());

        let result = service
            .create(NewUrlRecord::new("https://example.com").with_shortcode(""))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_generation_grows_length_then_gives_up() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records.expect_insert().times(50).returning(|record| {
            Err(AppError::conflict(
                "Shortcode already exists",
                json!({ "shortcode": record.shortcode }),
            ))
        });

        let service = registry(mock_records, MockClickRepository::new());

        let result = service.create(NewUrlRecord::new("https://example.com")).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_generation_uses_longer_code_after_collisions() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records
            .expect_insert()
            .withf(|record| record.shortcode.len() == 6)
            .times(10)
            .returning(|_| Err(AppError::conflict("Shortcode already exists", json!({}))));
        mock_records
            .expect_insert()
            .withf(|record| record.shortcode.len() == 7)
            .times(1)
            .returning(|_| Ok(()));

        let service = registry(mock_records, MockClickRepository::new());

        let record = service
            .create(NewUrlRecord::new("https://example.com"))
            .await
            .unwrap();

        assert_eq!(record.shortcode.len(), 7);
    }

    #[tokio::test]
    async fn test_create_store_error_propagates() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("store unavailable", json!({}))));

        let service = registry(mock_records, MockClickRepository::new());

        let result = service
            .create(NewUrlRecord::new("https://example.com").with_shortcode("mine"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_invalid_url() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records.expect_insert().times(0);

        let service = registry(mock_records, MockClickRepository::new());

        for url in ["", "not-a-url", "javascript:alert(1)", "/relative"] {
            let result = service.create(NewUrlRecord::new(url)).await;
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "'{url}' should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_create_empty_url_message() {
        let service = registry(MockUrlRecordRepository::new(), MockClickRepository::new());

        let err = service.create(NewUrlRecord::new("")).await.unwrap_err();
        assert_eq!(err.to_string(), "URL is required");
    }

    #[tokio::test]
    async fn test_create_invalid_validity() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records.expect_insert().times(0);

        let service = registry(mock_records, MockClickRepository::new());

        for minutes in [0, -5, MAX_VALIDITY_MINUTES + 1] {
            let result = service
                .create(NewUrlRecord::new("https://example.com").with_validity(minutes))
                .await;
            assert!(matches!(result, Err(AppError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn test_create_invalid_requested_shortcode() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records.expect_insert().times(0);

        let service = registry(mock_records, MockClickRepository::new());

        let result = service
            .create(NewUrlRecord::new("https://example.com").with_shortcode("has space"))
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_custom_validity_and_default_override() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records.expect_insert().times(2).returning(|_| Ok(()));

        let service = registry(mock_records, MockClickRepository::new()).with_default_validity(90);
        assert_eq!(service.default_validity_minutes(), 90);

        let record = service
            .create(NewUrlRecord::new("https://example.com"))
            .await
            .unwrap();
        assert_eq!(record.expires_at - record.created_at, Duration::minutes(90));

        let record = service
            .create(NewUrlRecord::new("https://example.com").with_validity(1))
            .await
            .unwrap();
        assert_eq!(record.expires_at - record.created_at, Duration::minutes(1));
    }

    #[tokio::test]
    async fn test_resolve_live_record() {
        let mut mock_records = MockUrlRecordRepository::new();
        let record = create_test_record("abc123", "https://example.com/target");
        mock_records
            .expect_find_by_shortcode()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let service = registry(mock_records, MockClickRepository::new());

        let resolved = service.resolve("abc123").await.unwrap();
        assert_eq!(resolved.original_url, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_records = MockUrlRecordRepository::new();
        mock_records
            .expect_find_by_shortcode()
            .times(1)
            .returning(|_| Ok(None));

        let service = registry(mock_records, MockClickRepository::new());

        let result = service.resolve("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_expired() {
        let mut mock_records = MockUrlRecordRepository::new();
        let record = create_expired_record("old");
        mock_records
            .expect_find_by_shortcode()
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let service = registry(mock_records, MockClickRepository::new());

        let result = service.resolve("old").await;
        assert!(matches!(result.unwrap_err(), AppError::Expired { .. }));
    }

    #[tokio::test]
    async fn test_get_stats_without_clicks() {
        let mut mock_records = MockUrlRecordRepository::new();
        let mut mock_clicks = MockClickRepository::new();

        let record = create_test_record("quiet", "https://example.com");
        mock_records
            .expect_find_by_shortcode()
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));
        mock_clicks
            .expect_list()
            .withf(|code| code == "quiet")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = registry(mock_records, mock_clicks);

        let stats = service.get_stats("quiet").await.unwrap();
        assert_eq!(stats.total_clicks, 0);
        assert!(stats.clicks.is_empty());
        assert_eq!(stats.record.shortcode, "quiet");
    }

    #[tokio::test]
    async fn test_get_stats_after_expiry() {
        let mut mock_records = MockUrlRecordRepository::new();
        let mut mock_clicks = MockClickRepository::new();

        let record = create_expired_record("old");
        mock_records
            .expect_find_by_shortcode()
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let click = ClickEvent::from_new(
            NewClick::new(Some("https://news.ycombinator.com"), None, "8.8.8.8", "US"),
            Utc::now() - Duration::minutes(9),
        );
        mock_clicks
            .expect_list()
            .times(1)
            .returning(move |_| Ok(vec![click.clone()]));

        let service = registry(mock_records, mock_clicks);

        let stats = service.get_stats("old").await.unwrap();
        assert_eq!(stats.total_clicks, 1);
        assert_eq!(stats.clicks[0].referrer, "https://news.ycombinator.com");
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let mut mock_records = MockUrlRecordRepository::new();
        let mut mock_clicks = MockClickRepository::new();
        mock_records
            .expect_find_by_shortcode()
            .times(1)
            .returning(|_| Ok(None));
        mock_clicks.expect_list().times(0);

        let service = registry(mock_records, mock_clicks);

        let result = service.get_stats("nope").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_short_link() {
        let service = registry(MockUrlRecordRepository::new(), MockClickRepository::new());

        assert_eq!(
            service.short_link("http://localhost:8080", "abc123"),
            "http://localhost:8080/abc123"
        );
        assert_eq!(
            service.short_link("https://s.example.com/", "xyz"),
            "https://s.example.com/xyz"
        );
    }
}
