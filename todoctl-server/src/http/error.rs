//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses of the form
//! `{"error": "<code>", "detail": "<message>"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (422)
    Validation(ValidationError),

    /// Request body could not be read as the expected JSON (status from the rejection)
    InvalidBody(JsonRejection),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "validation_error",
                    "detail": e.to_string()
                }),
            ),
            Self::InvalidBody(rejection) => (
                rejection.status(),
                json!({
                    "error": "invalid_body",
                    "detail": rejection.body_text()
                }),
            ),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "lookup missed");
                (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": "not_found",
                        "detail": format!("{} not found", capitalize(resource))
                    }),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "detail": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::Empty { field: "title" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["detail"], "title cannot be empty");
    }

    #[tokio::test]
    async fn not_found_is_404_with_message() {
        let err = ApiError::NotFound {
            resource: "todo",
            id: "missing".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Todo not found");
    }

    #[tokio::test]
    async fn database_error_is_500_and_generic() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "an internal error occurred");
    }

    #[test]
    fn db_not_found_maps_to_not_found() {
        let err = ApiError::from(DbError::NotFound {
            resource: "todo",
            id: "x".into(),
        });
        assert!(matches!(err, ApiError::NotFound { resource: "todo", .. }));
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("todo"), "Todo");
        assert_eq!(capitalize(""), "");
    }
}
