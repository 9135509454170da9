//! Hostname existence check applied before a URL is accepted.

use async_trait::async_trait;

/// Reasons a hostname lookup is considered failed.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] std::io::Error),

    #[error("lookup returned no addresses")]
    NoAddresses,

    #[error("lookup timed out after {0} ms")]
    Timeout(u64),
}

/// Confirms that a hostname resolves at request time.
///
/// This is a best-effort reachability signal, not a guarantee that the URL can be
/// fetched.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - Operating system resolver
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Succeeds if `host` resolves to at least one address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the lookup fails, yields nothing, or times out.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
