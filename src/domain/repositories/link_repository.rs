//! Repository trait for the durable link registry.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an insert attempt against the registry.
///
/// A slug collision is an expected outcome of candidate generation, not an
/// error, so it is modeled in the success channel and kept distinct from
/// store failures.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The record was persisted; the slug is now globally unique.
    Inserted(Link),
    /// The slug already exists. The caller may retry with a new candidate.
    SlugTaken,
}

/// The single source of truth mapping slug to target URL.
///
/// Uniqueness is enforced by the backing store's atomic constraint check:
/// concurrent inserts of the same slug resolve to exactly one
/// [`InsertOutcome::Inserted`], with all the losers observing
/// [`InsertOutcome::SlugTaken`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`; integration tests use an
///   in-memory fake (`tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Attempts to persist a new link.
    ///
    /// Returns [`InsertOutcome::SlugTaken`] exactly when the slug uniqueness
    /// constraint is violated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any other store failure. Callers
    /// must not treat store failures as collisions.
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Checks if the backing store is reachable.
    ///
    /// Used by the health endpoint to report registry status.
    async fn health_check(&self) -> bool;
}
