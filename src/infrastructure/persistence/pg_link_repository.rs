//! PostgreSQL implementation of the link registry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_slug;

/// Row shape for the `urls` relation.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.slug, row.long_url, row.created_at)
    }
}

/// PostgreSQL registry for link storage and retrieval.
///
/// Slug uniqueness is enforced by the `urls_slug_key` constraint, so
/// concurrent inserts racing on the same candidate resolve atomically in the
/// database: one winner, the rest observe [`InsertOutcome::SlugTaken`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO urls (slug, long_url)
            VALUES ($1, $2)
            RETURNING id, slug, long_url, created_at
            "#,
        )
        .bind(&new_link.slug)
        .bind(&new_link.long_url)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(InsertOutcome::Inserted(row.into())),
            Err(e) if is_unique_violation_on_slug(&e) => Ok(InsertOutcome::SlugTaken),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, slug, long_url, created_at
            FROM urls
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
