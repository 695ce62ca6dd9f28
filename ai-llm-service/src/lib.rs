//! Chat-completion client for OpenAI-compatible endpoints.
//!
//! The crate exposes:
//! - [`chat`] — role-tagged message types (user content may mix text and
//!   image-URL parts) and the [`ChatCompletion`] trait that callers program
//!   against, so tests can substitute a canned client.
//! - [`services::open_ai_service::OpenAiService`] — the real client:
//!   non-streaming `POST {endpoint}/v1/chat/completions` over `reqwest`.
//! - [`config`] — model configuration and strict env-driven constructors.
//! - [`health_service`] — a best-effort `GET {endpoint}/v1/models` probe.
//! - [`error_handler`] — unified error types for the whole crate.
//!
//! Construct one [`OpenAiService`] at startup, wrap it in `Arc`, and pass
//! clones to dependents. There is no retry, backoff, or cancellation: each
//! call awaits the upstream response until it answers, errors, or hits the
//! client timeout.

pub mod chat;
pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod services;

pub use chat::{ChatCompletion, ChatMessage, ContentPart, MessageContent, Role};
pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{AiLlmError, ConfigError};
pub use services::open_ai_service::OpenAiService;
