use std::env;
use std::time::Duration;

use business::domain::conversation::model::ModelName;
use business::domain::credential::ApiKey;
use gemini::client::DEFAULT_BASE_URL;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing_credential: {0} must be set in the environment or .env file")]
    MissingCredential(&'static str),
    #[error("config.invalid_timeout: {0}")]
    InvalidTimeout(String),
}

/// Configuration for Gemini API access.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: ApiKey,
    pub model: ModelName,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Load Gemini configuration from environment variables
    ///
    /// Environment variables:
    /// - GEMINI_API_KEY: API key (required, non-empty)
    /// - GEMINI_MODEL: default model (default: "gemini-2.5-flash")
    /// - GEMINI_BASE_URL: API root (default: public v1beta endpoint)
    /// - GEMINI_TIMEOUT_SECS: request timeout in seconds (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .and_then(|value| ApiKey::new(value).ok())
            .ok_or(ConfigError::MissingCredential(API_KEY_VAR))?;

        let model = lookup(MODEL_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(|value| ModelName::new(value.trim()))
            .unwrap_or_default();

        let base_url = lookup(BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR).filter(|value| !value.trim().is_empty()) {
            Some(raw) => Some(Self::parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }

    fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::InvalidTimeout(format!(
                "{} must be a positive number of seconds, got '{}'",
                TIMEOUT_VAR, raw
            ))),
        }
    }
}
