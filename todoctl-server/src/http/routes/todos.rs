//! Todo endpoints
//!
//! `/todos/completed/` and `/todos/pending/` are static routes, so the
//! router matches them ahead of `/todos/{id}`. Without the trailing slash,
//! `/todos/completed` falls through to the single-item lookup and 404s
//! like any unknown id. The bare `/todos` redirects to `/todos/`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::db::repos::{Todo, TodoFilter, TodoRepo};
use crate::http::doc::ErrorBody;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{timestamp, NewTodo, TodoChanges, TodoTitle, ValidationError};

/// Create todo request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    #[schema(example = "Complete project")]
    pub title: String,
    #[schema(example = "Finish the todo API project")]
    pub description: Option<String>,
    /// Defaults to `false`
    pub completed: Option<bool>,
}

impl TryFrom<CreateTodoRequest> for NewTodo {
    type Error = ValidationError;

    fn try_from(req: CreateTodoRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: TodoTitle::new(&req.title)?,
            description: req.description,
            completed: req.completed.unwrap_or(false),
        })
    }
}

/// Update todo request. Absent keys leave the column unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    /// `null` clears the description; absent leaves it alone
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl TryFrom<UpdateTodoRequest> for TodoChanges {
    type Error = ValidationError;

    fn try_from(req: UpdateTodoRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: req.title.as_deref().map(TodoTitle::new).transpose()?,
            description: req.description,
            completed: req.completed,
        })
    }
}

/// Todo response
#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    #[schema(example = "1c52b386-4ac7-4d3d-b9ea-0ac293bcda7a")]
    pub id: String,
    #[schema(example = "Complete project")]
    pub title: String,
    #[schema(example = "Finish the todo API project")]
    pub description: Option<String>,
    #[schema(example = false)]
    pub completed: bool,
    #[schema(example = "2025-05-11T10:00:00.000000Z")]
    pub created_at: String,
    #[schema(example = "2025-05-11T10:00:00.000000Z")]
    pub updated_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            completed: t.completed,
            created_at: timestamp::format(&t.created_at),
            updated_at: timestamp::format(&t.updated_at),
        }
    }
}

async fn list(state: &AppState, filter: TodoFilter) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = TodoRepo::new(&state.pool).list(filter).await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// POST /todos/ - create a new todo
#[utoipa::path(
    post,
    path = "/todos/",
    tags = ["Todos"],
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 422, description = "Missing or blank title", body = ErrorBody)
    )
)]
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let new = NewTodo::try_from(req)?;
    let todo = TodoRepo::new(&state.pool).create(new).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// GET /todos/ - all todos, newest first
#[utoipa::path(
    get,
    path = "/todos/",
    tags = ["Todos"],
    responses((status = 200, description = "All todos, newest first", body = [TodoResponse]))
)]
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    list(&state, TodoFilter::All).await
}

/// GET /todos/completed/ - completed todos, most recently updated first
#[utoipa::path(
    get,
    path = "/todos/completed/",
    tags = ["Todos"],
    responses((status = 200, description = "Completed todos, most recently updated first", body = [TodoResponse]))
)]
pub async fn list_completed_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    list(&state, TodoFilter::Completed).await
}

/// GET /todos/pending/ - open todos, newest first
#[utoipa::path(
    get,
    path = "/todos/pending/",
    tags = ["Todos"],
    responses((status = 200, description = "Open todos, newest first", body = [TodoResponse]))
)]
pub async fn list_pending_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    list(&state, TodoFilter::Pending).await
}

/// GET /todos/{id} - get a single todo
#[utoipa::path(
    get,
    path = "/todos/{id}",
    tags = ["Todos"],
    params(("id" = String, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorBody)
    )
)]
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = TodoRepo::new(&state.pool).get(&id).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// PUT /todos/{id} - partially update a todo
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tags = ["Todos"],
    params(("id" = String, Path, description = "Todo id")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "The updated todo", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 422, description = "Blank title", body = ErrorBody)
    )
)]
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let changes = TodoChanges::try_from(req)?;
    let todo = TodoRepo::new(&state.pool).update(&id, changes).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /todos/{id} - permanently delete a todo
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tags = ["Todos"],
    params(("id" = String, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "Todo not found", body = ErrorBody)
    )
)]
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    TodoRepo::new(&state.pool).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// /todos - 307 to the collection, keeping the method and body
async fn redirect_to_collection() -> Redirect {
    Redirect::temporary("/todos/")
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", any(redirect_to_collection))
        .route("/todos/", get(list_todos).post(create_todo))
        .route("/todos/completed/", get(list_completed_todos))
        .route("/todos/pending/", get(list_pending_todos))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}
