//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::StorageError;
use async_trait::async_trait;

/// Result of an atomic insert-if-absent keyed by `original_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No record existed for the URL; this call inserted it.
    Created(UrlRecord),
    /// A record for the URL already existed (possibly inserted by a concurrent caller).
    Existing(UrlRecord),
    /// The candidate `short_id` is already assigned to a different URL. Nothing was written.
    ShortIdTaken,
}

impl UpsertOutcome {
    /// Returns the stored record, if the call produced one.
    pub fn into_record(self) -> Option<UrlRecord> {
        match self {
            Self::Created(record) | Self::Existing(record) => Some(record),
            Self::ShortIdTaken => None,
        }
    }
}

/// Repository interface for URL records.
///
/// All mutation goes through [`UrlRepository::upsert`]. Records are never updated or
/// deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its normalized original URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be queried.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, StorageError>;

    /// Finds a record by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be queried.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StorageError>;

    /// Inserts `new_record` unless a record with the same `original_url` exists.
    ///
    /// Must be atomic: concurrent calls with the same `original_url` insert at most one
    /// record, and every caller observes that record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store is unreachable or the write fails.
    async fn upsert(&self, new_record: NewUrlRecord) -> Result<UpsertOutcome, StorageError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be queried.
    async fn count(&self) -> Result<i64, StorageError>;
}
