use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::content_generator::ContentGeneratorGemini;

use business::application::conversation::ask::AskUseCaseImpl;
use business::application::conversation::open_chat::OpenChatUseCaseImpl;
use business::application::conversation::send_message::SendMessageUseCaseImpl;
use business::domain::conversation::use_cases::ask::AskUseCase;
use business::domain::conversation::use_cases::open_chat::OpenChatUseCase;
use business::domain::conversation::use_cases::send_message::SendMessageUseCase;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub ask_use_case: Arc<dyn AskUseCase>,
    pub open_chat_use_case: Arc<dyn OpenChatUseCase>,
    pub send_message_use_case: Arc<dyn SendMessageUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &GeminiConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let gemini_client = GeminiClient::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.timeout,
        );
        let generator = Arc::new(ContentGeneratorGemini::new(gemini_client));

        // Conversation use cases
        let ask_use_case = Arc::new(AskUseCaseImpl {
            generator: generator.clone(),
            logger: logger.clone(),
        });
        let open_chat_use_case = Arc::new(OpenChatUseCaseImpl {
            generator,
            logger: logger.clone(),
        });
        let send_message_use_case = Arc::new(SendMessageUseCaseImpl { logger });

        Self {
            ask_use_case,
            open_chat_use_case,
            send_message_use_case,
        }
    }
}
