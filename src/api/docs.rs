//! API Documentation
//!
//! OpenAPI document for the student endpoints, served through Swagger UI.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers;
use crate::models::{ErrorResponse, HealthResponse, Student};

/// Swagger UI mount point.
pub const SWAGGER_PATH: &str = "/swagger";

/// Location of the generated OpenAPI JSON.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Service",
        description = "CRUD API over the student table"
    ),
    paths(
        handlers::list_students_handler,
        handlers::get_student_handler,
        handlers::create_student_handler,
        handlers::update_student_handler,
        handlers::delete_student_handler,
        handlers::health_handler,
    ),
    components(schemas(Student, HealthResponse, ErrorResponse)),
    tags(
        (name = "students", description = "Student records"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Swagger UI serving the OpenAPI document.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
