mod common;

use common::{DownCache, MemoryCache, MemoryRegistry, build_state, test_server};
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_health_all_ok() {
    let server = test_server(build_state(
        Arc::new(MemoryRegistry::new()),
        Arc::new(MemoryCache::new()),
    ));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(body["timestamp"].as_i64().unwrap() > 0);
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["cache"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_cache_still_answers_200() {
    let server = test_server(build_state(
        Arc::new(MemoryRegistry::new()),
        Arc::new(DownCache),
    ));

    let response = server.get("/health").await;

    // A dead cache slows the service down but does not break it.
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["cache"]["status"], "error");
}
