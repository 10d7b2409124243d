//! Error types for the student service
//!
//! Provides unified error handling using thiserror. Every failure on a
//! request path becomes a `StudentError` and is rendered as a JSON error body
//! with a matching status code; nothing a client sends can stop the server.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Student Error Enum ==
/// Unified error type for the student service.
#[derive(Error, Debug)]
pub enum StudentError {
    /// No student with the requested identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed identifier or request body
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Identifier already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database unreachable or connection pool exhausted
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// Invalid startup configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other database or server failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StudentError {
    /// Status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::NotFound(_) => StatusCode::NOT_FOUND,
            StudentError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            StudentError::Conflict(_) => StatusCode::CONFLICT,
            StudentError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StudentError::Config(_) | StudentError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Shorthand for the not-found error of a student id.
    pub fn student_not_found(id: i32) -> Self {
        StudentError::NotFound(format!("Student {} not found", id))
    }
}

// == Conversions ==
impl From<sqlx::Error> for StudentError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StudentError::NotFound("Student not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StudentError::Conflict("Student id already exists".to_string())
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StudentError::Unavailable(err.to_string()),
            _ => StudentError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for StudentError {
    fn from(rejection: JsonRejection) -> Self {
        StudentError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for StudentError {
    fn from(rejection: PathRejection) -> Self {
        StudentError::InvalidRequest(format!("Invalid student id: {}", rejection.body_text()))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Database details stay in the log
        let message = if status.is_server_error() {
            error!(error = %self, "Request failed");
            match self {
                StudentError::Unavailable(_) => "Database unavailable".to_string(),
                _ => "Internal server error".to_string(),
            }
        } else {
            match self {
                StudentError::NotFound(msg)
                | StudentError::InvalidRequest(msg)
                | StudentError::Conflict(msg) => msg,
                other => other.to_string(),
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the student service.
pub type Result<T> = std::result::Result<T, StudentError>;
