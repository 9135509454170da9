//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{UpsertOutcome, UrlRepository};
use crate::error::StorageError;

/// Name of the unique constraint on `short_urls.short_id`.
const SHORT_ID_CONSTRAINT: &str = "short_urls_short_id_key";

/// Inserts unless `original_url` exists, then returns whichever row is stored.
///
/// The second branch cannot see a row inserted by the first (same snapshot), so at most
/// one row comes back. Zero rows means a concurrent insert won the race after this
/// statement's snapshot was taken.
const UPSERT_SQL: &str = r#"
    WITH inserted AS (
        INSERT INTO short_urls (original_url, short_id)
        VALUES ($1, $2)
        ON CONFLICT (original_url) DO NOTHING
        RETURNING original_url, short_id, created_at
    )
    SELECT original_url, short_id, created_at, TRUE AS created FROM inserted
    UNION ALL
    SELECT original_url, short_id, created_at, FALSE AS created
    FROM short_urls
    WHERE original_url = $1
    LIMIT 1
"#;

/// PostgreSQL repository for URL records.
///
/// Uniqueness of `original_url` and `short_id` is enforced by table constraints.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: &PgRow) -> Result<UrlRecord, StorageError> {
    Ok(UrlRecord::new(
        row.try_get("original_url")?,
        row.try_get("short_id")?,
        row.try_get("created_at")?,
    ))
}

fn is_short_id_violation(err: &sqlx::Error) -> bool {
    let Some(db_err) = err.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && db_err.constraint() == Some(SHORT_ID_CONSTRAINT)
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT original_url, short_id, created_at
            FROM short_urls
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT original_url, short_id, created_at
            FROM short_urls
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn upsert(&self, new_record: NewUrlRecord) -> Result<UpsertOutcome, StorageError> {
        let result = sqlx::query(UPSERT_SQL)
            .bind(&new_record.original_url)
            .bind(&new_record.short_id)
            .fetch_optional(self.pool.as_ref())
            .await;

        let row = match result {
            Ok(row) => row,
            Err(e) if is_short_id_violation(&e) => return Ok(UpsertOutcome::ShortIdTaken),
            Err(e) => return Err(e.into()),
        };

        if let Some(row) = row {
            let created: bool = row.try_get("created")?;
            let record = row_to_record(&row)?;

            return Ok(if created {
                UpsertOutcome::Created(record)
            } else {
                UpsertOutcome::Existing(record)
            });
        }

        // The competing row is committed by now; a fresh statement sees it.
        self.find_by_original_url(&new_record.original_url)
            .await?
            .map(UpsertOutcome::Existing)
            .ok_or_else(|| {
                StorageError::InvalidData(format!(
                    "upsert returned no row for '{}'",
                    new_record.original_url
                ))
            })
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
