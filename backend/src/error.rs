//! Error handling for the Field Monitoring Sync Platform
//!
//! Every failure body carries a `retryable` flag so disconnected clients
//! can tell a transient infrastructure fault from a rejection that will
//! repeat on retransmission.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client data errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    /// A child record references a parent id that cannot be resolved
    #[error("Referential error: {0}")]
    Referential(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the caller may safely retry the same request unchanged
    pub fn retryable(&self) -> bool {
        matches!(self, AppError::DatabaseError(_))
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let retryable = self.retryable();
        let (status, code, message, field) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                message.clone(),
                Some(field.clone()),
            ),
            AppError::Referential(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "REFERENTIAL_ERROR",
                message.clone(),
                None,
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{} not found", resource),
                None,
            ),
            AppError::DatabaseError(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "DATABASE_ERROR",
                format!("A database error occurred: {}", e),
                None,
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
                None,
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: code.to_string(),
                message,
                retryable,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_errors_are_retryable() {
        let err = AppError::DatabaseError(sqlx::Error::PoolTimedOut);
        assert!(err.retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let validation = AppError::Validation {
            field: "farm.name".to_string(),
            message: "Name cannot be empty".to_string(),
        };
        assert!(!validation.retryable());
        assert!(!AppError::Referential("orphan plot".to_string()).retryable());
        assert!(!AppError::NotFound("Farm".to_string()).retryable());
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let not_found = AppError::NotFound("Farm".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let referential = AppError::Referential("orphan plot".to_string()).into_response();
        assert_eq!(referential.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let validation = AppError::Validation {
            field: "points.severity".to_string(),
            message: "Severity must be between 0 and 100".to_string(),
        }
        .into_response();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let database = AppError::DatabaseError(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(database.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
