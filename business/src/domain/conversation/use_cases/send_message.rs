use async_trait::async_trait;

use crate::domain::conversation::model::Conversation;
use crate::domain::errors::GenerationError;

pub struct SendMessageParams {
    pub message: String,
}

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        conversation: &mut Conversation,
        params: SendMessageParams,
    ) -> Result<String, GenerationError>;
}
