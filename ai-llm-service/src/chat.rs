//! Role-tagged chat messages and the completion seam.
//!
//! Messages model the OpenAI chat shape closely enough to serialize
//! one-to-one: a role plus content that is either a plain string or an
//! ordered list of parts (text and image URLs). Vision calls put their
//! `data:image/png;base64,...` URIs in [`ContentPart::ImageUrl`].
//!
//! [`ChatCompletion`] is the seam the rest of the workspace depends on.
//! Production code holds an `Arc<dyn ChatCompletion>` backed by
//! [`crate::OpenAiService`]; tests swap in a fixture client.

use async_trait::async_trait;

use crate::error_handler::AiLlmError;

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One content part of a mixed user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    /// Plain text fragment.
    Text(String),
    /// Image reference; typically a `data:image/png;base64,...` URI.
    ImageUrl(String),
}

/// Message content: a bare string or an ordered part list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    /// System instruction message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Plain-text user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(content.into()),
        }
    }

    /// User message mixing image parts (first) with a trailing text part.
    pub fn user_with_images(text: impl Into<String>, image_urls: Vec<String>) -> Self {
        let mut parts: Vec<ContentPart> = image_urls.into_iter().map(ContentPart::ImageUrl).collect();
        parts.push(ContentPart::Text(text.into()));
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
        }
    }
}

/// Non-streaming chat completion.
///
/// `temperature` is supplied per call because the steps of this system pin
/// different sampling regimes (extraction 0.0, questioning 0.6,
/// recommendation 0.4).
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Sends the message list and returns the assistant's text.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] on transport failures, non-2xx upstream
    /// status, undecodable payloads, or an empty `choices` array.
    async fn chat(&self, messages: &[ChatMessage], temperature: f32) -> Result<String, AiLlmError>;
}
