use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Fixed message returned when the gateway key is not configured.
pub const MISSING_API_KEY_MESSAGE: &str = "LOVABLE_API_KEY não configurada";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", MISSING_API_KEY_MESSAGE)]
    Configuration,

    #[error("{0}")]
    RateLimited(&'static str),

    #[error("{0}")]
    CreditsExhausted(&'static str),

    #[error("{0}")]
    Upstream(&'static str),

    #[error("{0}")]
    Parse(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::CreditsExhausted(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::Configuration
            | AppError::Upstream(_)
            | AppError::Parse(_)
            | AppError::InvalidPayload(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Configuration => tracing::error!("LOVABLE_API_KEY is not configured"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::InvalidPayload(msg) => tracing::warn!("Rejected request body: {msg}"),
            _ => {}
        }

        let body = Json(json!({ "error": self.to_string() }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_rate_limited_renders_429_with_message() {
        let (status, body) = render(AppError::RateLimited("tente mais tarde")).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"], "tente mais tarde");
    }

    #[tokio::test]
    async fn test_credits_exhausted_renders_402() {
        let (status, body) = render(AppError::CreditsExhausted("sem créditos")).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body["error"], "sem créditos");
    }

    #[tokio::test]
    async fn test_configuration_renders_fixed_message() {
        let (status, body) = render(AppError::Configuration).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], MISSING_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_internal_surfaces_error_message() {
        let (status, body) = render(AppError::Internal(anyhow::anyhow!("connection reset"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "connection reset");
    }

    #[test]
    fn test_error_body_is_a_flat_string() {
        let err = AppError::InvalidPayload("expected value at line 1 column 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid request body: expected value at line 1 column 1"
        );
    }
}
