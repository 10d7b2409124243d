//! Response DTOs for the student service API
//!
//! Defines the non-student HTTP response bodies.

use serde::Serialize;
use utoipa::ToSchema;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy" or "unhealthy")
    pub status: String,
    /// Whether the database answered a ping
    pub database: bool,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self::with_status("healthy", true)
    }

    /// Database unreachable
    pub fn unhealthy() -> Self {
        Self::with_status("unhealthy", false)
    }

    fn with_status(status: &str, database: bool) -> Self {
        Self {
            status: status.to_string(),
            database,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.database
    }
}

/// Error response body for all error conditions
///
/// Mirrors the body rendered by `StudentError`; kept as a type for the API docs.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
