use async_trait::async_trait;

use crate::domain::errors::GenerationError;

use super::model::ModelName;

/// Service port for the remote generative model.
#[async_trait]
pub trait ContentGeneratorService: Send + Sync {
    /// Sends `text` as a single request and returns the reply text.
    async fn generate(&self, model: &ModelName, text: &str) -> Result<String, GenerationError>;

    /// Creates an empty chat session. Does not contact the provider.
    async fn start_chat(&self, model: &ModelName) -> Result<Box<dyn ChatSession>, GenerationError>;
}

/// Handle to a multi-turn session. Keeps the ordered history of turns and
/// sends it along with every new message.
///
/// A failed send leaves the history as it was.
#[async_trait]
pub trait ChatSession: Send {
    async fn send(&mut self, message: &str) -> Result<String, GenerationError>;
}
