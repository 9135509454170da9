//! Short identifier allocation and resolution.
//!
//! Allocation and redirect outcomes are reported through the `metrics` facade:
//! `urls_allocated_total{outcome}`, `redirects_total{outcome}` and
//! `short_id_collisions_total`. The crate installs no recorder, so these are no-ops
//! unless the embedding process installs one.

use std::sync::Arc;

use url::Host;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::host_resolver::HostResolver;
use crate::domain::repositories::{UpsertOutcome, UrlRepository};
use crate::error::{AppError, StorageError};
use crate::utils::short_id::{generate_short_id, is_reserved};
use crate::utils::url_normalizer::normalize_url;

/// Attempts at finding an unused identifier before giving up.
const MAX_ALLOCATION_ATTEMPTS: usize = 10;

/// Service for shortening URLs and resolving short identifiers.
///
/// Holds no mutable state; all shared state lives in the repository.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    resolver: Arc<dyn HostResolver>,
    short_id_length: usize,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        resolver: Arc<dyn HostResolver>,
        short_id_length: usize,
    ) -> Self {
        Self {
            repository,
            resolver,
            short_id_length,
        }
    }

    /// Validates a submitted URL and allocates a short identifier for it.
    ///
    /// # Flow
    ///
    /// 1. Parse and normalize the URL (syntax check)
    /// 2. Resolve the hostname (existence check; IP literals skip the lookup)
    /// 3. [`Self::allocate`] with the normalized URL
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is malformed.
    /// Returns [`AppError::HostUnresolvable`] if the hostname does not resolve.
    /// Returns [`AppError::Storage`] on store failure.
    pub async fn shorten(&self, raw_url: &str) -> Result<UrlRecord, AppError> {
        let url = normalize_url(raw_url).map_err(|e| AppError::invalid_input(e.to_string()))?;

        match url.host() {
            Some(Host::Domain(domain)) => {
                if let Err(e) = self.resolver.resolve(domain).await {
                    tracing::info!(host = %domain, error = %e, "Hostname lookup failed");
                    return Err(AppError::host_unresolvable(domain));
                }
            }
            Some(Host::Ipv4(_) | Host::Ipv6(_)) => {}
            None => return Err(AppError::invalid_input("URL has no host")),
        }

        self.allocate(url.as_str()).await
    }

    /// Returns the record for `normalized_url`, creating it if absent.
    ///
    /// # Deduplication
    ///
    /// A known URL returns its existing record without writing and without generating
    /// an identifier. Otherwise the repository's atomic upsert decides the winner among
    /// concurrent callers, so all of them observe the same `short_id`.
    ///
    /// # Identifier Collisions
    ///
    /// If the generated identifier already belongs to another URL or names a fixed route
    /// (`new`, `health`, `public`), a new one is generated, up to 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store fails or no free identifier was found.
    /// Store failures are not retried.
    pub async fn allocate(&self, normalized_url: &str) -> Result<UrlRecord, AppError> {
        if let Some(existing) = self
            .repository
            .find_by_original_url(normalized_url)
            .await?
        {
            tracing::debug!(short_id = %existing.short_id, "URL already shortened");
            metrics::counter!("urls_allocated_total", "outcome" => "existing").increment(1);
            return Ok(existing);
        }

        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let short_id = generate_short_id(self.short_id_length);

            match self.try_insert(normalized_url, short_id).await? {
                UpsertOutcome::Created(record) => {
                    tracing::info!(short_id = %record.short_id, "Created short link");
                    metrics::counter!("urls_allocated_total", "outcome" => "created").increment(1);
                    return Ok(record);
                }
                UpsertOutcome::Existing(record) => {
                    tracing::debug!(short_id = %record.short_id, "URL shortened concurrently");
                    metrics::counter!("urls_allocated_total", "outcome" => "existing").increment(1);
                    return Ok(record);
                }
                UpsertOutcome::ShortIdTaken => {
                    tracing::warn!(attempt, "Short id collision, regenerating");
                    metrics::counter!("short_id_collisions_total").increment(1);
                }
            }
        }

        Err(StorageError::Conflict(format!(
            "no free short id after {MAX_ALLOCATION_ATTEMPTS} attempts"
        ))
        .into())
    }

    /// Inserts `normalized_url` under `short_id` unless the identifier is reserved.
    async fn try_insert(
        &self,
        normalized_url: &str,
        short_id: String,
    ) -> Result<UpsertOutcome, StorageError> {
        if is_reserved(&short_id) {
            return Ok(UpsertOutcome::ShortIdTaken);
        }

        self.repository
            .upsert(NewUrlRecord::new(normalized_url, short_id))
            .await
    }

    /// Looks up the record for a short identifier, taken verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Storage`] on store failure.
    pub async fn resolve(&self, short_id: &str) -> Result<UrlRecord, AppError> {
        let record = self.repository.find_by_short_id(short_id).await?;

        match record {
            Some(record) => {
                metrics::counter!("redirects_total", "outcome" => "hit").increment(1);
                Ok(record)
            }
            None => {
                metrics::counter!("redirects_total", "outcome" => "miss").increment(1);
                Err(AppError::not_found(short_id))
            }
        }
    }

    /// Counts stored records. Also serves as the store health probe.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be queried.
    pub async fn count(&self) -> Result<i64, StorageError> {
        self.repository.count().await
    }
}
