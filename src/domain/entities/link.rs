//! Link entity representing a slug-to-URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// The record is immutable once created: the slug never changes its target
/// URL and no update or delete operation exists.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, slug: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub slug: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "my-link-Ab3xYz".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.slug, "my-link-Ab3xYz");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            slug: "xyz789".to_string(),
            long_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.slug, "xyz789");
        assert_eq!(new_link.long_url, "https://rust-lang.org");
    }
}
