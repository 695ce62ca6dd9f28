//! Canned completion client for tests.
//!
//! Responses are matched by checking whether any text in the request
//! contains a registered substring (case-insensitive), so fixtures can be
//! keyed to prompt-template markers without network access.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use ai_llm_service::error_handler::{ProviderError, ProviderErrorKind};
use ai_llm_service::{AiLlmError, ChatCompletion, ChatMessage, ContentPart, MessageContent};

pub(crate) struct FakeChat {
    /// Pairs of (prompt substring, canned response), first match wins.
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    fail: bool,
    calls: AtomicUsize,
}

impl FakeChat {
    pub(crate) fn new() -> Self {
        Self {
            responses: Vec::new(),
            default_response: None,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut fake = Self::new();
        fake.responses
            .push((prompt_contains.to_string(), response.to_string()));
        fake
    }

    pub(crate) fn with_default_response(response: &str) -> Self {
        let mut fake = Self::new();
        fake.default_response = Some(response.to_string());
        fake
    }

    /// Every call fails with a provider error.
    pub(crate) fn failing() -> Self {
        let mut fake = Self::new();
        fake.fail = true;
        fake
    }

    pub(crate) fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn request_text(messages: &[ChatMessage]) -> String {
        let mut out = String::new();
        for message in messages {
            match &message.content {
                MessageContent::Text(text) => out.push_str(text),
                MessageContent::Parts(parts) => {
                    for part in parts {
                        if let ContentPart::Text(text) = part {
                            out.push_str(text);
                        }
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

#[async_trait]
impl ChatCompletion for FakeChat {
    async fn chat(&self, messages: &[ChatMessage], _temperature: f32) -> Result<String, AiLlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(ProviderError::new(ProviderErrorKind::EmptyChoices).into());
        }

        let text = Self::request_text(messages).to_lowercase();
        for (pattern, response) in &self.responses {
            if text.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(ProviderError::new(ProviderErrorKind::Decode(
                "FakeChat: no response configured for request".to_string(),
            ))
            .into()),
        }
    }
}
