//! Axum route handler shared by every coaching endpoint.

use axum::{
    extract::{rejection::BytesRejection, State},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde_json::Value;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::coaching::payload::Payload;
use crate::coaching::relay::relay;
use crate::coaching::use_cases::UseCase;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /functions/v1/:slug
///
/// The body is read raw so that a malformed or oversized payload surfaces as a
/// JSON error envelope instead of the extractor's plain-text rejection.
pub async fn handle_use_case(
    State(state): State<AppState>,
    use_case: &'static UseCase,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    let span = info_span!(
        "relay",
        use_case = use_case.slug,
        request_id = %Uuid::new_v4()
    );

    async move {
        let body = body.map_err(|rejection| AppError::InvalidPayload(rejection.body_text()))?;
        let payload = Payload::from_slice(&body)?;
        let today = Utc::now().date_naive();
        let response = relay(state.gateway.as_ref(), use_case, &payload, today).await?;
        Ok::<_, AppError>(Json(response))
    }
    .instrument(span)
    .await
}
