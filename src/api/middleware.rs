use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::StorageError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response format.
/// `detail` mirrors the message for clients that only read that field.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl AppError {
    fn status_and_detail(self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Database(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("DATABASE_ERROR", msg),
            ),
            AppError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail::new("VALIDATION_ERROR", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorDetail::new("NOT_FOUND", msg)),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorDetail::new("CONFLICT", msg)),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("INTERNAL_ERROR", msg),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!("{}: {}", error_detail.code, error_detail.message);
        }

        let body = Json(ErrorResponse {
            detail: error_detail.message.clone(),
            error: error_detail,
        });

        (status, body).into_response()
    }
}

/// Convert storage failures into API errors
impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Conflict(appcode) => {
                AppError::Conflict(format!("App with code {} already exists", appcode))
            }
            StorageError::NotFound(appcode) => {
                AppError::NotFound(format!("App not found: {}", appcode))
            }
            other => AppError::Database(other.to_string()),
        }
    }
}

/// Convert anyhow::Error to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (AppError::NotFound("App not found: A1".to_string()), StatusCode::NOT_FOUND),
            (AppError::Validation("missing field".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::Conflict("exists".to_string()), StatusCode::CONFLICT),
            (AppError::Database("locked".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_storage_error_mapping() {
        let err: AppError = StorageError::NotFound("A1".to_string()).into();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "App not found: A1"));

        let err: AppError = StorageError::Conflict("A1".to_string()).into();
        assert!(matches!(err, AppError::Conflict(_)));

        let err: AppError = StorageError::Database(rusqlite::Error::InvalidQuery).into();
        assert!(matches!(err, AppError::Database(_)));

        let err: AppError = anyhow::anyhow!("listener closed").into();
        assert!(matches!(err, AppError::Internal(msg) if msg == "listener closed"));
    }

    #[test]
    fn test_error_detail_creation() {
        let detail = ErrorDetail::new("TEST_CODE", "Test message");
        assert_eq!(detail.code, "TEST_CODE");
        assert_eq!(detail.message, "Test message");
    }
}
