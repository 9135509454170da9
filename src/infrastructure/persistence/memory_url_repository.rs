//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{UpsertOutcome, UrlRepository};
use crate::error::StorageError;

#[derive(Debug, Default)]
struct Tables {
    by_original_url: HashMap<String, UrlRecord>,
    /// short_id -> original_url
    short_ids: HashMap<String, String>,
}

/// Process-local repository backed by two hash maps behind one lock.
///
/// The check-and-insert in [`UrlRepository::upsert`] runs under a single write lock, which
/// gives the same at-most-one-insert guarantee as a unique constraint. Contents are lost on
/// restart; selected with a `memory://` connection string.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    tables: RwLock<Tables>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.by_original_url.get(original_url).cloned())
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StorageError> {
        let tables = self.tables.read().await;

        Ok(tables
            .short_ids
            .get(short_id)
            .and_then(|url| tables.by_original_url.get(url))
            .cloned())
    }

    async fn upsert(&self, new_record: NewUrlRecord) -> Result<UpsertOutcome, StorageError> {
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables.by_original_url.get(&new_record.original_url) {
            return Ok(UpsertOutcome::Existing(existing.clone()));
        }

        if tables.short_ids.contains_key(&new_record.short_id) {
            return Ok(UpsertOutcome::ShortIdTaken);
        }

        let record = new_record.into_record(Utc::now());
        tables
            .short_ids
            .insert(record.short_id.clone(), record.original_url.clone());
        tables
            .by_original_url
            .insert(record.original_url.clone(), record.clone());

        Ok(UpsertOutcome::Created(record))
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.by_original_url.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_creates_then_returns_existing() {
        let repo = MemoryUrlRepository::new();

        let first = repo
            .upsert(NewUrlRecord::new("https://example.com/", "abc1234"))
            .await
            .unwrap();
        let second = repo
            .upsert(NewUrlRecord::new("https://example.com/", "zzz9999"))
            .await
            .unwrap();

        let UpsertOutcome::Created(created) = first else {
            panic!("expected Created, got {first:?}");
        };
        let UpsertOutcome::Existing(existing) = second else {
            panic!("expected Existing, got {second:?}");
        };
        assert_eq!(created, existing);
        assert_eq!(existing.short_id, "abc1234");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upsert_reports_taken_short_id() {
        let repo = MemoryUrlRepository::new();

        repo.upsert(NewUrlRecord::new("https://a.example/", "same123"))
            .await
            .unwrap();
        let outcome = repo
            .upsert(NewUrlRecord::new("https://b.example/", "same123"))
            .await
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::ShortIdTaken);
        assert!(
            repo.find_by_original_url("https://b.example/")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_find_by_short_id() {
        let repo = MemoryUrlRepository::new();
        repo.upsert(NewUrlRecord::new("https://example.com/x", "findme1"))
            .await
            .unwrap();

        let found = repo.find_by_short_id("findme1").await.unwrap();
        assert_eq!(found.unwrap().original_url, "https://example.com/x");

        assert!(repo.find_by_short_id("FINDME1").await.unwrap().is_none());
    }
}
