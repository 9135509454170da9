//! Resolver backed by the operating system (`getaddrinfo` via Tokio).

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;

use crate::domain::host_resolver::{HostResolver, ResolveError};

/// Resolves hostnames with [`tokio::net::lookup_host`], bounded by a timeout.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        // Port is required by the API but irrelevant to the lookup.
        let lookup = lookup_host((host, 0));

        let mut addrs = tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| ResolveError::Timeout(self.timeout.as_millis() as u64))??;

        if addrs.next().is_some() {
            Ok(())
        } else {
            Err(ResolveError::NoAddresses)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_localhost() {
        let resolver = SystemResolver::new(Duration::from_secs(5));
        assert!(resolver.resolve("localhost").await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_tld_does_not_resolve() {
        let resolver = SystemResolver::new(Duration::from_secs(5));
        assert!(
            resolver
                .resolve("this-host-does-not-exist.invalid")
                .await
                .is_err()
        );
    }
}
