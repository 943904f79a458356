//! API error type and its JSON rendering.
//!
//! Every failure is rendered as `{"error": "<message>"}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use facalloc_core::{AllocationFailure, RepoError};
use log::error;
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        let status = match &value {
            RepoError::Validation(_) => StatusCode::BAD_REQUEST,
            RepoError::Conflict(_) => StatusCode::CONFLICT,
            RepoError::NotFound { .. } => StatusCode::NOT_FOUND,
            RepoError::Db(_) | RepoError::InvalidData(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, value.to_string())
    }
}

// Allocation failures are client-visible 400s carrying the storage message.
impl From<AllocationFailure> for ApiError {
    fn from(value: AllocationFailure) -> Self {
        Self::bad_request(value.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::bad_request(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::bad_request(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(
                "event=http_error module=api status={} error={}",
                self.status.as_u16(),
                self.message
            );
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
