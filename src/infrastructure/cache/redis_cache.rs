//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Redis cache for fast slug lookups.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Every command is bounded by a per-call timeout; a timed-out or
/// failed command is logged and degrades to a miss (reads) or a no-op
/// (writes), never to a request failure.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    op_timeout: Duration,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_url`]
    ///   is called with `ttl_seconds = None` (`CACHE_TTL_SECONDS` env var)
    /// - `op_timeout` - Upper bound for any single cache command
    ///   (`CACHE_OP_TIMEOUT_MS` env var)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(
        redis_url: &str,
        default_ttl_seconds: u64,
        op_timeout: Duration,
    ) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        timeout(op_timeout, test_conn.ping::<()>())
            .await
            .map_err(|_| CacheError::Connection("Redis PING timed out".to_string()))?
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            op_timeout,
            key_prefix: "slug:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, slug: &str) -> String {
        format!("{}{}", self.key_prefix, slug)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(slug);
        let mut conn = self.client.clone();

        match timeout(self.op_timeout, conn.get::<_, Option<String>>(&key)).await {
            Ok(Ok(Some(url))) => {
                debug!("Cache HIT: {}", slug);
                Ok(Some(url))
            }
            Ok(Ok(None)) => {
                debug!("Cache MISS: {}", slug);
                Ok(None)
            }
            Ok(Err(e)) => {
                warn!("Redis GET error for {}: {}", slug, e);
                Ok(None)
            }
            Err(_) => {
                warn!("Redis GET timed out for {}", slug);
                Ok(None)
            }
        }
    }

    async fn set_url(
        &self,
        slug: &str,
        long_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(slug);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        match timeout(self.op_timeout, conn.set_ex::<_, _, ()>(&key, long_url, ttl)).await {
            Ok(Ok(())) => {
                debug!("Cache SET: {} -> {} (TTL: {}s)", slug, long_url, ttl);
                Ok(())
            }
            Ok(Err(e)) => {
                warn!("Redis SET error for {}: {}", slug, e);
                Ok(())
            }
            Err(_) => {
                warn!("Redis SET timed out for {}", slug);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        matches!(timeout(self.op_timeout, conn.ping::<()>()).await, Ok(Ok(())))
    }
}
