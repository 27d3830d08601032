//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for the ephemeral slug-to-URL cache.
///
/// The cache is a best-effort accelerator, never a source of truth. A cache
/// entry is trusted within its TTL; after expiry it must be treated as
/// absent. Implementations must be thread-safe and fail open: an unreachable
/// backend degrades to a miss for reads and a no-op for writes, so callers
/// never fail a request on cache trouble.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the target URL for a slug from cache.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss or backend error (fail-open behavior)
    ///
    /// # Errors
    ///
    /// Production implementations log backend errors and report a miss
    /// instead. Callers still tolerate `Err` and treat it as a miss.
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>>;

    /// Stores a slug-to-URL mapping with optional TTL.
    ///
    /// Fire-and-forget: callers must not block correctness on this write
    /// succeeding.
    ///
    /// # Arguments
    ///
    /// - `slug` - The slug key
    /// - `long_url` - The target URL to cache
    /// - `ttl_seconds` - Optional TTL in seconds (implementation default if None)
    ///
    /// # Errors
    ///
    /// Production implementations log errors and return `Ok(())` to avoid
    /// disrupting the request flow.
    async fn set_url(&self, slug: &str, long_url: &str, ttl_seconds: Option<u64>)
    -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
