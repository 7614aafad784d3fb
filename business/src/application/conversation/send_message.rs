use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::conversation::model::Conversation;
use crate::domain::conversation::use_cases::send_message::{
    SendMessageParams, SendMessageUseCase,
};
use crate::domain::errors::GenerationError;
use crate::domain::logger::Logger;

pub struct SendMessageUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SendMessageUseCase for SendMessageUseCaseImpl {
    async fn execute(
        &self,
        conversation: &mut Conversation,
        params: SendMessageParams,
    ) -> Result<String, GenerationError> {
        self.logger.debug(&format!(
            "Sending chat message to model: {}",
            conversation.model()
        ));

        match conversation.session_mut().send(&params.message).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                self.logger.warn(&format!("Chat message failed: {}", err));
                Err(err)
            }
        }
    }
}
