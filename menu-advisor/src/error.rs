//! Typed error for the menu-advisor crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Input was not a usable image or image collection.
    #[error("unsupported image input: {0}")]
    UnsupportedImageInput(&'static str),

    /// PNG serialization failed while preparing an image for transport.
    #[error("image encoding error: {0}")]
    ImageEncode(#[from] image::ImageError),

    /// Errors from the chat completion client.
    #[error("completion error: {0}")]
    Completion(#[from] ai_llm_service::AiLlmError),
}
