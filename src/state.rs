//! Shared application state injected into all handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::cache::CacheService;

/// Process-wide handles shared by all concurrent request units.
///
/// Constructed once by the composition root and cloned cheaply per request.
/// The registry and cache handles also appear here directly so the health
/// endpoint can probe them without going through the resolution path.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub registry: Arc<dyn LinkRepository>,
    pub cache: Arc<dyn CacheService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        registry: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            link_service,
            registry,
            cache,
            started_at: Instant::now(),
        }
    }
}
