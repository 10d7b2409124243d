//! Data models for the student service
//!
//! The `Student` record plus the DTOs used for the remaining
//! HTTP response bodies.

pub mod responses;
pub mod student;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse};
pub use student::Student;
