//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::BoardError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub struct ApiError(pub BoardError);

impl ApiError {
    /// Status code and machine-readable kind for a board error.
    pub fn classify(err: &BoardError) -> (StatusCode, &'static str) {
        match err {
            BoardError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            BoardError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            BoardError::InvalidArgument { .. } => (StatusCode::BAD_REQUEST, "invalid_argument"),
            BoardError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Client-facing message. Store failures are logged and masked.
    pub fn public_message(err: &BoardError) -> String {
        match err {
            BoardError::Store(e) => {
                tracing::error!("Store error: {}", e);
                "an internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = Self::classify(&self.0);
        let body = json!({
            "error": kind,
            "message": Self::public_message(&self.0),
        });

        (status, Json(body)).into_response()
    }
}

impl From<BoardError> for ApiError {
    fn from(e: BoardError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(BoardError::Validation(ValidationError::Malformed {
            reason: rejection.body_text(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::StoreError;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError(BoardError::Validation(ValidationError::Empty { field: "title" }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "title cannot be empty");
    }

    #[tokio::test]
    async fn invalid_argument_is_400() {
        let err = ApiError(BoardError::InvalidArgument {
            value: "x".into(),
            reason: "not an integer",
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError(BoardError::NotFound { id: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn store_error_is_masked_500() {
        let err = ApiError(BoardError::Store(StoreError::Sqlx(sqlx::Error::PoolTimedOut)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "an internal error occurred");
    }
}
