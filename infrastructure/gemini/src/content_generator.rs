use std::sync::Arc;

use async_trait::async_trait;

use business::domain::conversation::model::ModelName;
use business::domain::conversation::services::{ChatSession, ContentGeneratorService};
use business::domain::errors::GenerationError;

use crate::chat_session::GeminiChatSession;
use crate::client::GeminiClient;
use crate::dto::Content;

pub struct ContentGeneratorGemini {
    client: Arc<GeminiClient>,
}

impl ContentGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ContentGeneratorService for ContentGeneratorGemini {
    async fn generate(&self, model: &ModelName, text: &str) -> Result<String, GenerationError> {
        self.client
            .generate_content(model, &[Content::user(text)])
            .await
    }

    async fn start_chat(&self, model: &ModelName) -> Result<Box<dyn ChatSession>, GenerationError> {
        Ok(Box::new(GeminiChatSession::new(
            self.client.clone(),
            model.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::credential::ApiKey;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn generator_for(server: &MockServer) -> ContentGeneratorGemini {
        ContentGeneratorGemini::new(GeminiClient::new(
            ApiKey::new("test-key").unwrap(),
            server.uri(),
            None,
        ))
    }

    #[tokio::test]
    async fn should_send_single_user_turn_with_given_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"role": "model", "parts": [{"text": "Sunny, 21°C."}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let generator = generator_for(&server);

        let text = generator
            .generate(
                &ModelName::new("gemini-2.5-flash"),
                "You are a news reporter.\nReport today's weather.",
            )
            .await
            .unwrap();

        assert_eq!(text, "Sunny, 21°C.");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = requests[0].body_json().unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{"text": "You are a news reporter.\nReport today's weather."}]
                }]
            })
        );
    }

    #[tokio::test]
    async fn should_start_chat_without_contacting_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let generator = generator_for(&server);

        let session = generator.start_chat(&ModelName::default()).await;

        assert!(session.is_ok());
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
