use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend. `GatewayClient` in production.
    pub gateway: Arc<dyn ChatGateway>,
    pub config: Config,
}
