use async_trait::async_trait;

use crate::domain::conversation::model::{Conversation, ModelName};
use crate::domain::errors::GenerationError;

pub struct OpenChatParams {
    pub model: ModelName,
    pub initial_prompt: String,
}

#[async_trait]
pub trait OpenChatUseCase: Send + Sync {
    async fn execute(&self, params: OpenChatParams) -> Result<Conversation, GenerationError>;
}
