use anyhow::{Context, Result};

use crate::export::netlify;
use crate::llm_client;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_model: String,
    pub groq_api_url: String,
    pub netlify_api_url: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_model: env_or("GROQ_MODEL", llm_client::DEFAULT_MODEL),
            groq_api_url: env_or("GROQ_API_URL", llm_client::DEFAULT_API_URL),
            netlify_api_url: env_or("NETLIFY_API_URL", netlify::DEFAULT_API_URL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Defaults with a placeholder key; nothing in tests talks to the network.
    pub fn for_tests() -> Self {
        Config {
            groq_api_key: "test-key".to_string(),
            groq_model: llm_client::DEFAULT_MODEL.to_string(),
            groq_api_url: "http://127.0.0.1:9/chat/completions".to_string(),
            netlify_api_url: "http://127.0.0.1:9".to_string(),
            port: 8080,
            max_upload_bytes: 64 * 1024,
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_names_missing_variable() {
        let err = require_env("FOLIO_TEST_SURELY_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("FOLIO_TEST_SURELY_UNSET_VAR"));
    }

    #[test]
    fn test_env_or_falls_back() {
        assert_eq!(env_or("FOLIO_TEST_SURELY_UNSET_VAR", "fallback"), "fallback");
    }
}
