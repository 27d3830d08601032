//! Cache-aside link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::slug::{generate_candidate, normalize_phrase};
use crate::utils::url_policy::validate_target_url;

/// Upper bound on slug generation attempts per creation request.
///
/// Exhaustion is bad luck, not a validation error; the whole request is safe
/// to retry.
const MAX_SLUG_ATTEMPTS: usize = 3;

/// Outcome of a successful slug resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub long_url: String,
    /// True when the answer came from the cache fast path.
    pub cached: bool,
}

/// Orchestrates the registry and the cache into the cache-aside protocol.
///
/// Holds injected handles to the durable registry (source of truth) and the
/// ephemeral cache (best-effort accelerator). Both are safe for concurrent
/// use; the service keeps no other mutable state, so uniqueness relies
/// entirely on the registry's atomic constraint check.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    blocked_extensions: Vec<String>,
    cache_ttl_seconds: u64,
}

impl LinkService {
    /// Creates a new link service with injected store handles.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        blocked_extensions: Vec<String>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            links,
            cache,
            blocked_extensions,
            cache_ttl_seconds,
        }
    }

    /// Creates a short link for a target URL, optionally derived from a phrase.
    ///
    /// Validates the target URL, normalizes the phrase, then attempts up to
    /// [`MAX_SLUG_ATTEMPTS`] candidate slugs against the registry. A slug
    /// collision retries with fresh randomness; a store failure aborts
    /// immediately and is never retried as if it were a collision. On success
    /// the cache is primed best-effort at the standard TTL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the target URL is malformed or
    /// denylisted, [`AppError::Internal`] on store failure or collision
    /// exhaustion.
    pub async fn create_link(&self, long_url: &str, phrase: &str) -> Result<Link, AppError> {
        validate_target_url(long_url, &self.blocked_extensions)
            .map_err(|reason| AppError::rejected(reason, long_url))?;

        let normalized = normalize_phrase(phrase);

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let candidate = generate_candidate(&normalized);

            let new_link = NewLink {
                slug: candidate.clone(),
                long_url: long_url.to_string(),
            };

            match self.links.insert(new_link).await? {
                InsertOutcome::Inserted(link) => {
                    self.prime_cache(&link.slug, &link.long_url).await;
                    return Ok(link);
                }
                InsertOutcome::SlugTaken => {
                    debug!(slug = %candidate, attempt, "slug collision, retrying");
                }
            }
        }

        Err(AppError::internal(format!(
            "slug generation exhausted after {MAX_SLUG_ATTEMPTS} attempts"
        )))
    }

    /// Resolves a slug to its target URL via the cache-aside read path.
    ///
    /// A cache hit is returned immediately without consulting the registry.
    /// A miss, or an unavailable cache, falls back to the registry; a found
    /// record triggers a best-effort cache backfill before returning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no record matches the slug, and
    /// [`AppError::Internal`] on registry failure. Cache trouble is never
    /// surfaced.
    pub async fn resolve(&self, slug: &str) -> Result<Resolution, AppError> {
        match self.cache.get_url(slug).await {
            Ok(Some(long_url)) => {
                return Ok(Resolution {
                    long_url,
                    cached: true,
                });
            }
            Ok(None) => {}
            Err(e) => {
                warn!(slug, "cache lookup failed, falling back to registry: {e}");
            }
        }

        let link = self
            .links
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found(format!("no link for slug {slug}")))?;

        self.prime_cache(slug, &link.long_url).await;

        Ok(Resolution {
            long_url: link.long_url,
            cached: false,
        })
    }

    /// Best-effort cache write; failure is logged and otherwise invisible.
    async fn prime_cache(&self, slug: &str, long_url: &str) {
        if let Err(e) = self
            .cache
            .set_url(slug, long_url, Some(self.cache_ttl_seconds))
            .await
        {
            warn!(slug, "cache write failed: {e}");
        }
    }
}
