//! todoctl-server: HTTP CRUD API for todo items
//!
//! Layers:
//! - `db` - SQLite pool, schema bootstrap, and the todo repository
//! - `models` - validated inputs (`TodoTitle`, `NewTodo`, `TodoChanges`)
//! - `http` - axum router, handlers, error mapping, and the server loop

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, run_migrations, DbError, Todo, TodoFilter, TodoRepo};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{NewTodo, TodoChanges, TodoTitle, ValidationError};
