//! OpenAPI documentation
//!
//! [`ApiDoc`] collects the annotated handlers and request/response types into
//! one OpenAPI document. The router serves it as JSON at `/openapi.json` and
//! through Swagger UI at `/docs`.

use utoipa::{OpenApi, ToSchema};

use super::routes::{health, todos};

/// Error payload shared by every failing endpoint.
///
/// Mirrors the JSON built in [`super::error::ApiError`]; it exists only for
/// schema generation.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ErrorBody {
    /// Machine-readable code: `not_found`, `validation_error`,
    /// `invalid_body` or `internal_error`.
    #[schema(example = "not_found")]
    error: String,
    /// Human-readable message.
    #[schema(example = "Todo not found")]
    detail: String,
}

/// OpenAPI document for the todo API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple Todo API",
        description = "A todo CRUD API backed by a single SQLite table."
    ),
    paths(
        health::root,
        health::health,
        todos::create_todo,
        todos::list_todos,
        todos::list_completed_todos,
        todos::list_pending_todos,
        todos::get_todo,
        todos::update_todo,
        todos::delete_todo,
    ),
    components(schemas(
        todos::CreateTodoRequest,
        todos::UpdateTodoRequest,
        todos::TodoResponse,
        health::WelcomeResponse,
        health::HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "Root", description = "Welcome and health endpoints"),
        (name = "Todos", description = "Create, list, update and delete todos")
    )
)]
pub struct ApiDoc;
