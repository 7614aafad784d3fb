use std::sync::Arc;

use async_trait::async_trait;

use business::domain::conversation::model::ModelName;
use business::domain::conversation::services::ChatSession;
use business::domain::errors::GenerationError;

use crate::client::GeminiClient;
use crate::dto::Content;

/// Multi-turn session against `generateContent`.
///
/// The endpoint is stateless, so the session keeps the turns itself and
/// replays them on each send. A user/model pair is only appended once the
/// exchange succeeded.
pub struct GeminiChatSession {
    client: Arc<GeminiClient>,
    model: ModelName,
    history: Vec<Content>,
}

impl GeminiChatSession {
    pub fn new(client: Arc<GeminiClient>, model: ModelName) -> Self {
        Self {
            client,
            model,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }
}

#[async_trait]
impl ChatSession for GeminiChatSession {
    async fn send(&mut self, message: &str) -> Result<String, GenerationError> {
        let mut contents = self.history.clone();
        contents.push(Content::user(message));

        let reply = self.client.generate_content(&self.model, &contents).await?;

        contents.push(Content::model(reply.clone()));
        self.history = contents;

        Ok(reply)
    }
}
