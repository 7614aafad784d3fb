/// Errors raised while talking to the generative model.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation.missing_credential")]
    MissingCredential,
    #[error("generation.transport_failure: {0}")]
    Transport(String),
    #[error("generation.provider_error: {0}")]
    Provider(String),
}

impl GenerationError {
    pub fn missing_credential() -> Self {
        GenerationError::MissingCredential
    }
    pub fn transport(detail: impl Into<String>) -> Self {
        GenerationError::Transport(detail.into())
    }
    pub fn provider(detail: impl Into<String>) -> Self {
        GenerationError::Provider(detail.into())
    }
}
