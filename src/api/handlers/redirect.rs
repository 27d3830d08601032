//! Handler for the public short link redirect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its target URL.
///
/// # Endpoint
///
/// `GET /r/{slug}`
///
/// Shares the cache-aside resolution path with the API; the only difference
/// is the response shape: a `307 Temporary Redirect` on success and plain
/// text bodies on failure, since the caller is a browser following a shared
/// link rather than an API client.
pub async fn redirect_handler(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.resolve(&slug).await {
        Ok(resolution) => Redirect::temporary(&resolution.long_url).into_response(),
        Err(AppError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, "Short link not found").into_response()
        }
        Err(e) => {
            error!("redirect failed for {slug}: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}
