mod common;

use std::collections::HashSet;
use std::sync::Arc;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::MemoryUrlRepository;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_allocation_creates_one_record() {
    let repository = Arc::new(MemoryUrlRepository::new());
    let service = Arc::new(common::create_test_service(repository.clone()));

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.allocate("https://example.com/hot").await })
        })
        .collect();

    let mut short_ids = HashSet::new();
    for handle in handles {
        let record = handle.await.unwrap().unwrap();
        assert_eq!(record.original_url, "https://example.com/hot");
        short_ids.insert(record.short_id);
    }

    assert_eq!(short_ids.len(), 1);
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_round_trip_for_many_urls() {
    let repository = Arc::new(MemoryUrlRepository::new());
    let service = common::create_test_service(repository.clone());

    let mut short_ids = HashSet::new();
    for i in 0..50 {
        let url = format!("https://example.com/{i}");
        let record = service.allocate(&url).await.unwrap();
        short_ids.insert(record.short_id.clone());

        let resolved = service.resolve(&record.short_id).await.unwrap();
        assert_eq!(resolved.original_url, url);
    }

    assert_eq!(short_ids.len(), 50);
    assert_eq!(repository.count().await.unwrap(), 50);
}
