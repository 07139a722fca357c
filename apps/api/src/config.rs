use anyhow::{Context, Result};

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Application configuration loaded once from environment variables at startup.
///
/// The gateway key is optional here: a missing key does not stop the server,
/// every relay call fails with a configuration error instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub gateway_api_key: Option<String>,
    pub gateway_url: String,
    pub model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gateway_api_key: optional_env("LOVABLE_API_KEY"),
            gateway_url: optional_env("AI_GATEWAY_URL")
                .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
            model: optional_env("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("COACH_API_TEST_BLANK", "   ");
        assert_eq!(optional_env("COACH_API_TEST_BLANK"), None);
        std::env::remove_var("COACH_API_TEST_BLANK");
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("COACH_API_TEST_KEY", " sk-123 \n");
        assert_eq!(
            optional_env("COACH_API_TEST_KEY").as_deref(),
            Some("sk-123")
        );
        std::env::remove_var("COACH_API_TEST_KEY");
    }
}
