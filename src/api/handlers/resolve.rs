//! Handler for the slug resolution endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a slug to its target URL without redirecting.
///
/// # Endpoint
///
/// `GET /api/resolve/{slug}`
///
/// # Response
///
/// ```json
/// { "longUrl": "https://example.com/a/b", "cached": true }
/// ```
///
/// `cached` reports whether the cache fast path answered.
///
/// # Errors
///
/// Returns 404 for an unknown slug and 500 on registry failure.
pub async fn resolve_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let resolution = state.link_service.resolve(&slug).await?;

    Ok(Json(ResolveResponse {
        long_url: resolution.long_url,
        cached: resolution.cached,
    }))
}
