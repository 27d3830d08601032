//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a target URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/a/b", "phrase": "My Cool Link!!" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "slug": "my-cool-link-Ab3xYz" }`.
///
/// # Errors
///
/// Returns 400 with `{"error": "invalid_format"}` or
/// `{"error": "blocked_extension"}` when the target URL is rejected, and 500
/// on store failure or slug collision exhaustion (the request may be retried).
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let link = state
        .link_service
        .create_link(&payload.long_url, &payload.phrase)
        .await?;

    Ok((StatusCode::CREATED, Json(ShortenResponse { slug: link.slug })))
}
