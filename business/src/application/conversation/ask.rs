use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::conversation::model::compose_query;
use crate::domain::conversation::services::ContentGeneratorService;
use crate::domain::conversation::use_cases::ask::{AskParams, AskUseCase};
use crate::domain::errors::GenerationError;
use crate::domain::logger::Logger;

pub struct AskUseCaseImpl {
    pub generator: Arc<dyn ContentGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AskUseCase for AskUseCaseImpl {
    async fn execute(&self, params: AskParams) -> Result<String, GenerationError> {
        self.logger.info(&format!(
            "Sending single-turn request to model: {}",
            params.model
        ));

        let query = compose_query(&params.prompt, &params.question);

        match self.generator.generate(&params.model, &query).await {
            Ok(reply) => {
                self.logger
                    .info(&format!("Received reply of {} chars", reply.chars().count()));
                Ok(reply)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Single-turn request failed: {}", err));
                Err(err)
            }
        }
    }
}
