//! API Routes
//!
//! Configures the Axum router for the enabled student operations.

use axum::{
    routing::{delete, get, post, put, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use super::docs::swagger_ui;
use super::handlers::{
    create_student_handler, delete_student_handler, get_student_handler, health_handler,
    list_students_handler, update_student_handler, AppState,
};
use crate::operations::Operation;

/// Creates the main router with the endpoints selected by `state`.
///
/// # Endpoints
/// - `GET /students` - List students (`list`)
/// - `GET /student/:id` - Fetch one student (`get`)
/// - `POST /create/student` - Insert a student (`create`)
/// - `PUT /update/student/:id`, `PUT /student/:id` - Update a student (`update`)
/// - `DELETE /delete/student/:id`, `DELETE /student/:id` - Delete a student (`delete`)
/// - `GET /health` - Health check endpoint, always mounted
/// - `/swagger` - Swagger UI, when docs are enabled
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let ops = &state.operations;

    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new().route("/health", get(health_handler));

    if ops.contains(Operation::List) {
        router = router.route("/students", get(list_students_handler));
    }
    if ops.contains(Operation::Create) {
        router = router.route("/create/student", post(create_student_handler));
    }

    // GET, PUT and DELETE share /student/:id
    let mut student_routes: Option<MethodRouter<AppState>> = None;
    if ops.contains(Operation::Get) {
        student_routes = Some(get(get_student_handler));
    }
    if ops.contains(Operation::Update) {
        student_routes = Some(match student_routes {
            Some(routes) => routes.put(update_student_handler),
            None => put(update_student_handler),
        });
        router = router.route("/update/student/:id", put(update_student_handler));
    }
    if ops.contains(Operation::Delete) {
        student_routes = Some(match student_routes {
            Some(routes) => routes.delete(delete_student_handler),
            None => delete(delete_student_handler),
        });
        router = router.route("/delete/student/:id", delete(delete_student_handler));
    }
    if let Some(routes) = student_routes {
        router = router.route("/student/:id", routes);
    }

    if state.docs_enabled {
        router = router.merge(swagger_ui());
    }

    debug!(operations = %state.operations, docs = state.docs_enabled, "Router built");

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Student;
    use crate::operations::OperationSet;
    use crate::store::MemoryStudentStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let store = MemoryStudentStore::with_students([Student::new(1, "A", "a@x.com", 20)]);
        create_router(AppState::new(store))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/students")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/create/student")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id":2,"name":"B","email":"b@x.com","age":21}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/student/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_disabled_operation_is_not_routed() {
        let state = AppState::new(MemoryStudentStore::new())
            .with_operations(OperationSet::none().with(Operation::List));
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/delete/student/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_shared_path_without_delete_is_method_not_allowed() {
        let state = AppState::new(MemoryStudentStore::new())
            .with_operations(OperationSet::none().with(Operation::Get));
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/student/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_swagger_mounted_when_enabled() {
        let state = AppState::new(MemoryStudentStore::new()).with_docs(true);
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_swagger_absent_when_disabled() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
