use super::gemini_config::{ConfigError, GeminiConfig};

pub struct AppConfig {
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            gemini: GeminiConfig::from_env()?,
        })
    }
}
