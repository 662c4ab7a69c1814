//! Vision model abstraction

use async_trait::async_trait;
use social_os_core::{AppError, ImageContentType};

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("GEMINI_API_KEY is not configured.")]
    MissingApiKey,

    /// The provider answered with an error status.
    #[error("Gemini API call failed: {0}")]
    Remote(String),

    /// The call never produced a usable response (timeout, connection reset,
    /// undecodable body).
    #[error("Gemini API call failed: {0}")]
    Transport(String),
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::MissingApiKey => AppError::Config(err.to_string()),
            InferenceError::Remote(_) | InferenceError::Transport(_) => {
                AppError::Upstream(err.to_string())
            }
        }
    }
}

/// One multimodal inference call: fixed instructions plus an inline image.
#[derive(Debug, Clone, Copy)]
pub struct VisionRequest<'a> {
    pub system_prompt: &'a str,
    pub instruction: &'a str,
    pub image: &'a [u8],
    pub content_type: ImageContentType,
}

/// A multimodal model that reads an image and answers with free-form text.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Fail fast when credentials are missing, before any work is done.
    fn check_configured(&self) -> Result<(), InferenceError> {
        Ok(())
    }

    /// Run inference and return the concatenated text of every candidate part.
    async fn generate(&self, request: VisionRequest<'_>) -> Result<String, InferenceError>;
}
