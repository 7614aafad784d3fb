use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use business::domain::conversation::model::ModelName;
use business::domain::credential::ApiKey;
use business::domain::errors::GenerationError;

use crate::dto::{ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl GeminiClient {
    /// Without a `timeout` the transport's own default applies.
    pub fn new(api_key: ApiKey, base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = match builder.build() {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, ?timeout, "could not build HTTP client, falling back to defaults");
                Client::default()
            }
        };

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Returns the generateContent endpoint URL for a model.
    pub fn generate_content_url(&self, model: &ModelName) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Sends the given turns and returns the text of the reply.
    pub async fn generate_content(
        &self,
        model: &ModelName,
        contents: &[Content],
    ) -> Result<String, GenerationError> {
        debug!(%model, turns = contents.len(), "sending generateContent request");

        let response = self
            .client
            .post(self.generate_content_url(model))
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&GenerateContentRequest { contents })
            .send()
            .await
            .map_err(|e| GenerationError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::transport(e.to_string()))?;

        if !status.is_success() {
            warn!(%model, status = status.as_u16(), "generateContent request rejected");
            return Err(GenerationError::provider(Self::describe_failure(
                status.as_u16(),
                &body,
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::provider(format!("unreadable response: {}", e)))?;

        let text = parsed.into_text()?;
        debug!(%model, chars = text.chars().count(), "received generateContent reply");
        Ok(text)
    }

    fn describe_failure(status: u16, body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error.status {
                Some(code) => format!("HTTP {} {}: {}", status, code, envelope.error.message),
                None => format!("HTTP {}: {}", status, envelope.error.message),
            },
            Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
            Err(_) => format!("HTTP {}: {}", status, body.trim()),
        }
    }
}
