//! Gateway client — the single point of entry for all chat-completion calls.
//!
//! No other module may call the gateway directly. Handlers depend on the
//! `ChatGateway` trait so the transport can be swapped in tests.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::config::Config;

pub mod extract;
pub mod prompts;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gateway returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected gateway response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("gateway returned no message content")]
    EmptyContent,
}

/// System and user instructions sent together as one chat request.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Content of the first choice, the only part of the reply that is consumed.
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}

/// A chat-completion backend: one prompt pair in, the assistant's text out.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn complete(
        &self,
        prompts: &PromptPair,
        temperature: Option<f32>,
    ) -> Result<String, GatewayError>;
}

/// HTTP client for the OpenAI-compatible chat-completion gateway.
/// Issues exactly one request per call: no retries, no caching.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    api_key: Option<String>,
    url: String,
    model: String,
}

impl GatewayClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.gateway_api_key.clone(),
            url: config.gateway_url.clone(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body<'a>(
        &'a self,
        prompts: &'a PromptPair,
        temperature: Option<f32>,
    ) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompts.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompts.user,
                },
            ],
            temperature,
        }
    }
}

#[async_trait]
impl ChatGateway for GatewayClient {
    async fn complete(
        &self,
        prompts: &PromptPair,
        temperature: Option<f32>,
    ) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingApiKey)?;

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&self.request_body(prompts, temperature))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Gateway returned {}: {}", status, body);
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion = serde_json::from_str(&body)?;
        let text = completion.into_text().ok_or(GatewayError::EmptyContent)?;

        debug!("Gateway call succeeded: {} chars of content", text.len());

        Ok(text)
    }
}
