//! In-process implementation of the registry and ledger repositories.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{ClickEvent, NewClick, UrlRecord};
use crate::domain::repositories::{ClickRepository, UrlRecordRepository};
use crate::error::AppError;

/// A registered record together with its click log.
#[derive(Debug)]
struct Slot {
    record: UrlRecord,
    clicks: Vec<ClickEvent>,
}

/// Concurrency-safe store backing both the registry and the ledger.
///
/// Each shortcode owns one map slot holding its record and click log, so a
/// log can only exist for a registered record. Operations on one shortcode
/// serialize on that slot's shard lock; nothing here awaits while a lock is
/// held.
///
/// Nothing is evicted: records and clicks live for the lifetime of the
/// process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: DashMap<String, Slot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using in-memory store");
        Self::default()
    }

    /// Total clicks across every shortcode.
    pub fn total_clicks(&self) -> usize {
        self.slots.iter().map(|slot| slot.clicks.len()).sum()
    }
}

#[async_trait]
impl UrlRecordRepository for MemoryStore {
    async fn insert(&self, record: UrlRecord) -> Result<(), AppError> {
        match self.slots.entry(record.shortcode.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Shortcode already exists",
                json!({ "shortcode": record.shortcode }),
            )),
            Entry::Vacant(vacant) => {
                vacant.insert(Slot {
                    record,
                    clicks: Vec::new(),
                });
                Ok(())
            }
        }
    }

    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.slots.get(shortcode).map(|slot| slot.record.clone()))
    }

    async fn count_records(&self) -> Result<usize, AppError> {
        Ok(self.slots.len())
    }
}

#[async_trait]
impl ClickRepository for MemoryStore {
    async fn append(&self, shortcode: &str, click: NewClick) -> Result<ClickEvent, AppError> {
        let mut slot = self.slots.get_mut(shortcode).ok_or_else(|| {
            AppError::not_found("Short URL not found", json!({ "shortcode": shortcode }))
        })?;

        // Stamped under the slot lock and clamped to the previous event, so a
        // clock step backwards cannot reorder the log.
        let now = Utc::now();
        let timestamp = slot
            .clicks
            .last()
            .map_or(now, |last| last.timestamp.max(now));

        let event = ClickEvent::from_new(click, timestamp);
        slot.clicks.push(event.clone());

        Ok(event)
    }

    async fn list(&self, shortcode: &str) -> Result<Vec<ClickEvent>, AppError> {
        Ok(self
            .slots
            .get(shortcode)
            .map(|slot| slot.clicks.clone())
            .unwrap_or_default())
    }

    async fn count_clicks(&self, shortcode: &str) -> Result<usize, AppError> {
        Ok(self
            .slots
            .get(shortcode)
            .map_or(0, |slot| slot.clicks.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;

    fn record(code: &str) -> UrlRecord {
        UrlRecord::new(
            code.to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            30,
        )
    }

    fn click(ip: &str) -> NewClick {
        NewClick::new(None, None, ip, "Test Location")
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryStore::new();
        store.insert(record("abc123")).await.unwrap();

        let found = store.find_by_shortcode("abc123").await.unwrap();
        assert_eq!(found.unwrap().original_url, "https://example.com");
        assert!(store.find_by_shortcode("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_conflicts_and_keeps_original() {
        let store = MemoryStore::new();
        store.insert(record("dup")).await.unwrap();

        let mut other = record("dup");
        other.original_url = "https://other.com".to_string();
        let result = store.insert(other).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        let found = store.find_by_shortcode("dup").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com");
        assert_eq!(store.count_records().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_expired_duplicate_still_conflicts() {
        let store = MemoryStore::new();
        let expired = UrlRecord::new(
            "old".to_string(),
            "https://example.com".to_string(),
            Utc::now() - Duration::hours(2),
            1,
        );
        store.insert(expired).await.unwrap();

        assert!(matches!(
            store.insert(record("old")).await,
            Err(AppError::Conflict { .. })
        ));
    }

    #[tokio::test]
    async fn test_new_record_has_empty_log() {
        let store = MemoryStore::new();
        store.insert(record("fresh")).await.unwrap();

        assert!(store.list("fresh").await.unwrap().is_empty());
        assert_eq!(store.count_clicks("fresh").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_append_unknown_shortcode_rejected() {
        let store = MemoryStore::new();

        let result = store.append("ghost", click("1.1.1.1")).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
        assert!(store.list("ghost").await.unwrap().is_empty());
        assert_eq!(store.total_clicks(), 0);
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = MemoryStore::new();
        store.insert(record("ordered")).await.unwrap();

        for i in 0..10 {
            store
                .append("ordered", click(&format!("10.0.0.{i}")))
                .await
                .unwrap();
        }

        let clicks = store.list("ordered").await.unwrap();
        assert_eq!(clicks.len(), 10);
        for (i, event) in clicks.iter().enumerate() {
            assert_eq!(event.source_ip, format!("10.0.0.{i}"));
        }
        assert!(clicks.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[tokio::test]
    async fn test_list_unknown_is_empty() {
        let store = MemoryStore::new();
        assert!(store.list("nothing").await.unwrap().is_empty());
        assert_eq!(store.count_clicks("nothing").await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_lose_nothing() {
        let store = Arc::new(MemoryStore::new());
        store.insert(record("busy")).await.unwrap();

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .append("busy", click(&format!("192.0.2.{i}")))
                        .await
                        .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let clicks = store.list("busy").await.unwrap();
        assert_eq!(clicks.len(), 100);
        assert!(clicks.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_single_winner() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let mut rec = record("race");
                    rec.original_url = format!("https://example.com/{i}");
                    store.insert(rec).await.is_ok()
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.count_records().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_total_clicks_across_codes() {
        let store = MemoryStore::new();
        store.insert(record("a")).await.unwrap();
        store.insert(record("b")).await.unwrap();

        store.append("a", click("1.1.1.1")).await.unwrap();
        store.append("a", click("1.1.1.2")).await.unwrap();
        store.append("b", click("1.1.1.3")).await.unwrap();

        assert_eq!(store.total_clicks(), 3);
    }
}
