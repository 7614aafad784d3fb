use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::conversation::model::Conversation;
use crate::domain::conversation::services::ContentGeneratorService;
use crate::domain::conversation::use_cases::open_chat::{OpenChatParams, OpenChatUseCase};
use crate::domain::errors::GenerationError;
use crate::domain::logger::Logger;

pub struct OpenChatUseCaseImpl {
    pub generator: Arc<dyn ContentGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl OpenChatUseCase for OpenChatUseCaseImpl {
    async fn execute(&self, params: OpenChatParams) -> Result<Conversation, GenerationError> {
        self.logger
            .info(&format!("Opening chat session with model: {}", params.model));

        let mut session = self.generator.start_chat(&params.model).await.map_err(|err| {
            self.logger
                .error(&format!("Could not create chat session: {}", err));
            err
        })?;

        // The initial prompt is the first turn of the session.
        let opening_reply = session.send(&params.initial_prompt).await.map_err(|err| {
            self.logger
                .error(&format!("Initial prompt was not accepted: {}", err));
            err
        })?;

        self.logger.info("Chat session opened");

        Ok(Conversation::new(params.model, session, opening_reply))
    }
}
