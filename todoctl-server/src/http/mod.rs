//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses
//! - OpenAPI document and Swagger UI

pub mod doc;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use doc::ApiDoc;
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
