//! API error taxonomy and the `{error}` response envelope.
//!
//! # Design
//! Every failure leaving the API boundary is one of three shapes: `NotFound`
//! (404, always the literal message "Item not found"), `BadRequest` (400,
//! built from axum's body/path rejections), or `Internal` (500, anything
//! unexpected). All three serialize as `{"error": "..."}` so clients can
//! read one envelope regardless of status.
//!
//! The reference implementation collapsed malformed bodies into a generic
//! 500 and let malformed path ids fall through to 404; both are mapped to
//! 400 here instead.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by the API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Item not found")]
    NotFound,

    /// Malformed request body or path id.
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure while serving the request.
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
