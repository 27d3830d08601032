//! Application error type and HTTP error mapping.
//!
//! Error responses carry a flat `{"error": "<code>"}` body with a stable
//! machine-readable code. Internal detail (database messages, slugs under
//! attempt) is logged but never leaked to callers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

use crate::utils::url_policy::RejectReason;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug)]
pub enum AppError {
    /// Client-fault rejection of the target URL. Carries the reason code
    /// reported to the caller (`invalid_format` or `blocked_extension`).
    Validation {
        code: &'static str,
        message: String,
    },
    /// No link record matches the requested slug.
    NotFound { message: String },
    /// Store failure or collision exhaustion. Reported opaquely.
    Internal { message: String },
}

impl AppError {
    pub fn rejected(reason: RejectReason, target_url: &str) -> Self {
        Self::Validation {
            code: reason.code(),
            message: format!("target url rejected ({}): {target_url}", reason.code()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Validation { code, message } => write!(f, "validation error ({code}): {message}"),
            Self::NotFound { message } => write!(f, "not found: {message}"),
            Self::Internal { message } => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation { code, message } => {
                tracing::debug!("request rejected: {message}");
                (StatusCode::BAD_REQUEST, *code)
            }
            AppError::NotFound { message } => {
                tracing::debug!("not found: {message}");
                (StatusCode::NOT_FOUND, "not_found")
            }
            AppError::Internal { message } => {
                tracing::error!("internal error: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        (status, Json(ErrorBody { error: code })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("database error: {e}"))
    }
}
