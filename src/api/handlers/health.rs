//! Handler for the health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with per-store checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers 200; `status` is `"ok"` when both stores respond and
/// `"degraded"` otherwise. A degraded cache does not make the service
/// unhealthy for its callers, it only makes it slower, so the distinction
/// lives in the body rather than the status code.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "uptime": 12.5,
///   "timestamp": 1756100000000,
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok" },
///     "cache": { "status": "ok" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.registry.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Registry unreachable".to_string()),
        }
    };

    let cache = if state.cache.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Cache unreachable".to_string()),
        }
    };

    let all_healthy = database.status == "ok" && cache.status == "ok";

    Json(HealthResponse {
        status: if all_healthy { "ok" } else { "degraded" }.to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: Utc::now().timestamp_millis(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database, cache },
    })
}
