//! The prompt relay: build prompts → call the gateway → extract JSON → envelope.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::coaching::payload::Payload;
use crate::coaching::use_cases::{ParseFallback, UseCase};
use crate::errors::AppError;
use crate::llm_client::extract::{check_shape, extract_json, ExtractError};
use crate::llm_client::{ChatGateway, GatewayError};

/// Runs one use case against the gateway and returns the response body.
///
/// Exactly one gateway call is made per invocation; nothing is cached or retried.
pub async fn relay(
    gateway: &dyn ChatGateway,
    use_case: &UseCase,
    payload: &Payload,
    today: NaiveDate,
) -> Result<Value, AppError> {
    let prompts = use_case.prompt.build(payload, today);

    let content = gateway
        .complete(&prompts, use_case.temperature)
        .await
        .map_err(|e| classify_gateway_error(use_case, e))?;

    let result = match parse_result(use_case, &content) {
        Ok(result) => result,
        Err(e) => match use_case.on_parse_failure {
            ParseFallback::Fail => {
                error!("Could not parse model output: {e}");
                return Err(AppError::Parse(use_case.messages.parse_failure));
            }
            ParseFallback::RawContent => {
                warn!("Could not parse model output, returning raw content: {e}");
                ParseFallback::degraded(&content)
            }
        },
    };

    info!("Relay completed");
    Ok(use_case.envelope.wrap(result, payload))
}

fn parse_result(use_case: &UseCase, content: &str) -> Result<Value, ExtractError> {
    let value = extract_json(content)?;
    check_shape(&value, use_case.required)?;
    Ok(value)
}

/// Maps a gateway failure to the user-facing error for this use case.
fn classify_gateway_error(use_case: &UseCase, err: GatewayError) -> AppError {
    match err {
        GatewayError::MissingApiKey => AppError::Configuration,
        GatewayError::Status { status: 429, .. } => {
            warn!("Gateway rate limit reached");
            AppError::RateLimited(use_case.messages.rate_limited)
        }
        GatewayError::Status { status: 402, .. } => {
            warn!("Gateway credits exhausted");
            AppError::CreditsExhausted(use_case.messages.credits_exhausted)
        }
        GatewayError::Status { .. } => AppError::Upstream(use_case.messages.upstream_failure),
        other => AppError::Internal(other.into()),
    }
}
