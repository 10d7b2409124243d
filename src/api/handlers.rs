//! API Handlers
//!
//! HTTP request handlers for each student service endpoint.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::models::{ErrorResponse, HealthResponse, Student};
use crate::operations::OperationSet;
use crate::store::StudentStore;

/// Application state shared across all handlers.
///
/// Holds the injected store plus the route selection the router is built from.
#[derive(Clone)]
pub struct AppState {
    /// Persistence accessor shared by every request
    pub store: Arc<dyn StudentStore>,
    /// Operations mounted on the router
    pub operations: OperationSet,
    /// Whether Swagger UI is mounted
    pub docs_enabled: bool,
}

impl AppState {
    /// Creates a new AppState with every operation enabled and docs off.
    pub fn new(store: impl StudentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            operations: OperationSet::all(),
            docs_enabled: false,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(store: Arc<dyn StudentStore>, config: &Config) -> Self {
        Self {
            store,
            operations: config.operations.clone(),
            docs_enabled: config.docs_enabled,
        }
    }

    pub fn with_operations(mut self, operations: OperationSet) -> Self {
        self.operations = operations;
        self
    }

    pub fn with_docs(mut self, enabled: bool) -> Self {
        self.docs_enabled = enabled;
        self
    }
}

/// Handler for GET /students
#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "All students", body = [Student]),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_students_handler(State(state): State<AppState>) -> Result<Json<Vec<Student>>> {
    let students = state.store.list().await?;
    Ok(Json(students))
}

/// Handler for GET /student/:id
#[utoipa::path(
    get,
    path = "/student/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "The student", body = Student),
        (status = 400, description = "Identifier is not an integer", body = ErrorResponse),
        (status = 404, description = "No such student", body = ErrorResponse)
    )
)]
pub async fn get_student_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<Student>> {
    let Path(id) = id?;
    let student = state.store.get(id).await?;
    Ok(Json(student))
}

/// Handler for POST /create/student
///
/// Inserts the submitted student and echoes it back.
#[utoipa::path(
    post,
    path = "/create/student",
    tag = "students",
    request_body = Student,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Identifier already taken", body = ErrorResponse)
    )
)]
pub async fn create_student_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Student>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>)> {
    let Json(student) = payload?;
    state.store.create(&student).await?;

    info!(id = student.id, "Student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// Handler for PUT /update/student/:id
///
/// Only the row addressed by the path is changed; the body's id is ignored.
/// `PUT /student/{id}` is an alias of this route.
#[utoipa::path(
    put,
    path = "/update/student/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student identifier")),
    request_body = Student,
    responses(
        (status = 200, description = "Stored student", body = Student),
        (status = 400, description = "Malformed identifier or body", body = ErrorResponse),
        (status = 404, description = "No such student", body = ErrorResponse)
    )
)]
pub async fn update_student_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
    payload: std::result::Result<Json<Student>, JsonRejection>,
) -> Result<Json<Student>> {
    let Path(id) = id?;
    let Json(student) = payload?;

    if student.id != id {
        warn!(path_id = id, body_id = student.id, "Ignoring body id on update");
    }

    let updated = state.store.update(id, &student).await?;
    info!(id, "Student updated");
    Ok(Json(updated))
}

/// Handler for DELETE /delete/student/:id
///
/// Returns the removed record. `DELETE /student/{id}` is an alias of this route.
#[utoipa::path(
    delete,
    path = "/delete/student/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Deleted student", body = Student),
        (status = 400, description = "Identifier is not an integer", body = ErrorResponse),
        (status = 404, description = "No such student", body = ErrorResponse)
    )
)]
pub async fn delete_student_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<Student>> {
    let Path(id) = id?;
    let deleted = state.store.delete(id).await?;

    info!(id, "Student deleted");
    Ok(Json(deleted))
}

/// Handler for GET /health
///
/// Returns 503 when the database does not answer.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = match state.store.ping().await {
        Ok(()) => HealthResponse::healthy(),
        Err(err) => {
            warn!(error = %err, "Health check failed");
            HealthResponse::unhealthy()
        }
    };

    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudentError;
    use crate::store::MemoryStudentStore;

    fn test_state() -> AppState {
        AppState::new(MemoryStudentStore::new())
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = test_state();
        let student = Student::new(1, "A", "a@x.com", 20);

        let (status, Json(echo)) =
            create_student_handler(State(state.clone()), Ok(Json(student.clone())))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(echo, student);

        let Json(fetched) = get_student_handler(State(state), Ok(Path(1))).await.unwrap();
        assert_eq!(fetched, student);
    }

    #[tokio::test]
    async fn test_get_nonexistent_student() {
        let state = test_state();

        let result = get_student_handler(State(state), Ok(Path(404))).await;
        assert!(matches!(result, Err(StudentError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_handler() {
        let state = AppState::new(MemoryStudentStore::with_students([
            Student::new(1, "A", "a@x.com", 20),
            Student::new(2, "B", "b@x.com", 21),
        ]));

        let Json(students) = list_students_handler(State(state)).await.unwrap();
        assert_eq!(students.len(), 2);
    }

    #[tokio::test]
    async fn test_update_handler_uses_path_id() {
        let state = AppState::new(MemoryStudentStore::with_students([
            Student::new(1, "A", "a@x.com", 20),
            Student::new(2, "B", "b@x.com", 21),
        ]));

        let body = Student::new(2, "A2", "a2@x.com", 30);
        let Json(updated) = update_student_handler(State(state.clone()), Ok(Path(1)), Ok(Json(body)))
            .await
            .unwrap();
        assert_eq!(updated, Student::new(1, "A2", "a2@x.com", 30));

        let Json(untouched) = get_student_handler(State(state), Ok(Path(2))).await.unwrap();
        assert_eq!(untouched.name, "B");
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = AppState::new(MemoryStudentStore::with_students([Student::new(
            1, "A", "a@x.com", 20,
        )]));

        let Json(deleted) = delete_student_handler(State(state.clone()), Ok(Path(1)))
            .await
            .unwrap();
        assert_eq!(deleted.id, 1);

        let result = get_student_handler(State(state), Ok(Path(1))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let (status, Json(response)) = health_handler(State(test_state())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.status, "healthy");
    }
}
