#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use snaplink::api::handlers::{health_handler, redirect_handler};
use snaplink::prelude::*;
use snaplink::utils::url_policy::default_blocked_extensions;

/// In-memory registry fake enforcing slug uniqueness like the real store.
pub struct MemoryRegistry {
    links: Mutex<HashMap<String, Link>>,
    next_id: AtomicI64,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Inserts a record directly, bypassing the service layer.
    pub fn seed(&self, slug: &str, long_url: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.links.lock().unwrap().insert(
            slug.to_string(),
            Link::new(id, slug.to_string(), long_url.to_string(), Utc::now()),
        );
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.links.lock().unwrap().contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for MemoryRegistry {
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.contains_key(&new_link.slug) {
            return Ok(InsertOutcome::SlugTaken);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let link = Link::new(id, new_link.slug.clone(), new_link.long_url, Utc::now());
        links.insert(new_link.slug, link.clone());

        Ok(InsertOutcome::Inserted(link))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.lock().unwrap().get(slug).cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Registry fake whose every operation fails, for store-outage tests.
pub struct FailingRegistry;

#[async_trait]
impl LinkRepository for FailingRegistry {
    async fn insert(&self, _new_link: NewLink) -> Result<InsertOutcome, AppError> {
        Err(AppError::internal("registry down"))
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::internal("registry down"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// In-memory cache fake. Entries never expire; TTL is accepted and ignored.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.lock().unwrap().contains_key(slug)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(slug).cloned())
    }

    async fn set_url(
        &self,
        slug: &str,
        long_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(slug.to_string(), long_url.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache fake simulating an unreachable backend.
pub struct DownCache;

#[async_trait]
impl CacheService for DownCache {
    async fn get_url(&self, _slug: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn set_url(
        &self,
        _slug: &str,
        _long_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Builds application state over the given fakes.
pub fn build_state(registry: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> AppState {
    let link_service = Arc::new(LinkService::new(
        registry.clone(),
        cache.clone(),
        default_blocked_extensions(),
        3600,
    ));

    AppState::new(link_service, registry, cache)
}

/// Spins up a test server with the full route surface.
pub fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/r/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", snaplink::api::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}
