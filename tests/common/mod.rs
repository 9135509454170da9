#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use url_shortener::application::services::UrlService;
use url_shortener::domain::entities::{NewUrlRecord, UrlRecord};
use url_shortener::domain::host_resolver::{HostResolver, ResolveError};
use url_shortener::domain::repositories::{UpsertOutcome, UrlRepository};
use url_shortener::error::StorageError;
use url_shortener::infrastructure::persistence::MemoryUrlRepository;
use url_shortener::state::AppState;

/// Resolver that accepts every host except those under the reserved `.invalid` TLD.
pub struct StubResolver;

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        if host.ends_with(".invalid") {
            Err(ResolveError::NoAddresses)
        } else {
            Ok(())
        }
    }
}

/// Repository whose every operation fails as if the database were down.
pub struct UnavailableRepository;

fn unavailable() -> StorageError {
    StorageError::Unavailable("connection refused (10.0.0.5:5432)".to_string())
}

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn find_by_original_url(&self, _: &str) -> Result<Option<UrlRecord>, StorageError> {
        Err(unavailable())
    }

    async fn find_by_short_id(&self, _: &str) -> Result<Option<UrlRecord>, StorageError> {
        Err(unavailable())
    }

    async fn upsert(&self, _: NewUrlRecord) -> Result<UpsertOutcome, StorageError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, StorageError> {
        Err(unavailable())
    }
}

pub fn create_test_service(repository: Arc<dyn UrlRepository>) -> UrlService {
    UrlService::new(repository, Arc::new(StubResolver), 7)
}

pub fn create_test_state() -> AppState {
    let repository = Arc::new(MemoryUrlRepository::new());
    AppState::new(Arc::new(create_test_service(repository)))
}

pub fn create_unavailable_state() -> AppState {
    AppState::new(Arc::new(create_test_service(Arc::new(UnavailableRepository))))
}

pub fn static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
}
