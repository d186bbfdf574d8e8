//! Server error types with HTTP status code mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Malformed request: bad body, missing field, invalid parameter
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// The string is already in the catalog
    #[error("{0}")]
    Conflict(String),

    /// Well-formed but semantically unusable input
    #[error("{0}")]
    Unprocessable(String),
}

impl ServerError {
    #[must_use]
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    #[must_use]
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    #[must_use]
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::Unprocessable(msg.into())
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// JSON error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status reason, e.g. "Not Found"
    pub error: String,
    pub message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(status = status.as_u16(), "Request rejected: {self}");

        let body = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ServerError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServerError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ServerError::unprocessable("x").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_display_is_message() {
        let err = ServerError::not_found("String does not exist in the system");
        assert_eq!(err.to_string(), "String does not exist in the system");
    }

    #[test]
    fn test_into_response_status() {
        let response = ServerError::conflict("dup").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
