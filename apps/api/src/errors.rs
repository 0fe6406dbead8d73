use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::job_postings::store::StoreError;
use crate::job_postings::validation::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every error body has the shape `{ "message": ..., "success": false }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON payload")]
    MalformedPayload(#[source] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MalformedPayload(e) => {
                tracing::warn!("Rejected job posting body: {e}");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Validation(e) => {
                tracing::warn!("Job posting failed validation: {e}");
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create job posting".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
            "success": false
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_payload_maps_to_bad_request() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = AppError::MalformedPayload(parse_err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid JSON payload");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_validation_message_passes_through() {
        let response = AppError::Validation(ValidationError::InvalidUrl).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid company_website URL.");
    }

    #[tokio::test]
    async fn test_store_error_hides_details() {
        let response = AppError::Store(StoreError::SequenceExhausted).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to create job posting");
        assert_eq!(body["success"], false);
    }
}
