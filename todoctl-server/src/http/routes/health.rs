//! Root and health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Welcome response
#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(value_type = String)]
    pub message: &'static str,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String, example = "ok")]
    pub status: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tags = ["Root"],
    responses((status = 200, description = "Welcome message", body = WelcomeResponse))
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Todo API! Go to /docs for documentation.",
    })
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tags = ["Root"],
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Root and health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_welcomes() {
        let Json(body) = root().await;
        assert!(body.message.starts_with("Welcome"));
        assert!(body.message.contains("/docs"));
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
