//! API Module
//!
//! HTTP handlers, routing and OpenAPI docs for the student service.
//!
//! # Endpoints
//! - `GET /students` - List all students
//! - `GET /student/:id` - Fetch a student by id
//! - `POST /create/student` - Create a student
//! - `PUT /update/student/:id` - Update a student
//! - `DELETE /delete/student/:id` - Delete a student
//! - `GET /health` - Health check endpoint

pub mod docs;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
