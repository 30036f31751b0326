//! API error type producing the fixed JSON error envelope
//!
//! Every failure maps to one of four codes. The body carries a fixed
//! message per code and no per-field detail; causes go to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed payload (400)
    BadRequest,

    /// Missing resource or empty page (404)
    NotFound,

    /// Bad input or failed write (422)
    Unprocessable,

    /// Unexpected failure (500, logged)
    Internal { message: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "resource not found",
            Self::Unprocessable => "unprocessable",
            Self::Internal { .. } => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { message } = &self {
            tracing::error!("Internal error: {}", message);
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        tracing::debug!("Validation failed: {}", e);
        Self::Unprocessable
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound,
            DbError::Sqlx(e) => Self::Internal {
                message: e.to_string(),
            },
        }
    }
}

/// Fallback for unmatched routes: same 404 envelope as in-route misses.
pub async fn fallback_404() -> ApiError {
    ApiError::NotFound
}
