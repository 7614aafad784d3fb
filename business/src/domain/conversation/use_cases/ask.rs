use async_trait::async_trait;

use crate::domain::conversation::model::ModelName;
use crate::domain::errors::GenerationError;

pub struct AskParams {
    pub model: ModelName,
    pub prompt: String,
    pub question: String,
}

#[async_trait]
pub trait AskUseCase: Send + Sync {
    async fn execute(&self, params: AskParams) -> Result<String, GenerationError>;
}
