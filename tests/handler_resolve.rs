mod common;

use common::{DownCache, FailingRegistry, MemoryCache, MemoryRegistry, build_state, test_server};
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_resolve_from_registry_then_cache() {
    let registry = Arc::new(MemoryRegistry::new());
    registry.seed("docs-Ab3xYz", "https://example.com/docs");

    let cache = Arc::new(MemoryCache::new());
    let server = test_server(build_state(registry, cache.clone()));

    // First hit misses the cache, falls back to the registry, and backfills.
    let response = server.get("/api/resolve/docs-Ab3xYz").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["longUrl"], "https://example.com/docs");
    assert_eq!(body["cached"], false);
    assert!(cache.contains("docs-Ab3xYz"));

    // Second hit is served by the cache.
    let body: Value = server.get("/api/resolve/docs-Ab3xYz").await.json();
    assert_eq!(body["longUrl"], "https://example.com/docs");
    assert_eq!(body["cached"], true);
}

#[tokio::test]
async fn test_resolve_unknown_slug() {
    let cache = Arc::new(MemoryCache::new());
    let server = test_server(build_state(Arc::new(MemoryRegistry::new()), cache.clone()));

    let response = server.get("/api/resolve/missing").await;

    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert_eq!(body["error"], "not_found");
    // A miss on both stores must not backfill anything.
    assert!(!cache.contains("missing"));
}

#[tokio::test]
async fn test_resolve_with_unavailable_cache() {
    let registry = Arc::new(MemoryRegistry::new());
    registry.seed("alive-Ab3xYz", "https://example.com/alive");

    let server = test_server(build_state(registry, Arc::new(DownCache)));

    // Cache outage degrades to a miss; the registry still answers.
    let response = server.get("/api/resolve/alive-Ab3xYz").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["longUrl"], "https://example.com/alive");
    assert_eq!(body["cached"], false);
}

#[tokio::test]
async fn test_resolve_registry_failure() {
    let server = test_server(build_state(Arc::new(FailingRegistry), Arc::new(DownCache)));

    let response = server.get("/api/resolve/any-slug").await;

    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["error"], "internal_error");
}
