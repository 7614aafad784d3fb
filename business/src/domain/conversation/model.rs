use super::services::ChatSession;

/// Model used when none is given explicitly.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Identifier of a remote model, e.g. `gemini-2.5-flash`.
///
/// Not validated locally; the provider rejects unknown names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModelName {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModelName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Builds the text of a single-turn request: the context prompt, a newline,
/// then the question.
pub fn compose_query(prompt: &str, question: &str) -> String {
    format!("{}\n{}", prompt, question)
}

/// A multi-turn conversation opened against one model.
///
/// Wraps the provider's session handle. History lives in the handle; the
/// conversation only keeps the reply to the opening prompt.
pub struct Conversation {
    model: ModelName,
    session: Box<dyn ChatSession>,
    opening_reply: String,
}

impl Conversation {
    pub fn new(model: ModelName, session: Box<dyn ChatSession>, opening_reply: String) -> Self {
        Self {
            model,
            session,
            opening_reply,
        }
    }

    pub fn model(&self) -> &ModelName {
        &self.model
    }

    /// The model's answer to the initial prompt.
    pub fn opening_reply(&self) -> &str {
        &self.opening_reply
    }

    pub(crate) fn session_mut(&mut self) -> &mut dyn ChatSession {
        self.session.as_mut()
    }
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation")
            .field("model", &self.model)
            .field("opening_reply", &self.opening_reply)
            .finish_non_exhaustive()
    }
}
