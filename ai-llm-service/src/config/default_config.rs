//! Default LLM config loaded strictly from environment variables.
//!
//! This module provides the convenience constructor for [`LlmModelConfig`]
//! used at process startup. The system talks to a single OpenAI-compatible
//! endpoint; any compatible gateway works by overriding the base URL.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = API key (mandatory; the process refuses to start
//!   without it)
//! - `OPENAI_API_MODEL` = model identifier (optional, default `gpt-4o-mini`)
//! - `OPENAI_API_BASE`  = API base URL (optional, default
//!   `https://api.openai.com`)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS` = optional request timeout in seconds (u64)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{AiLlmError, env_opt_u32, env_opt_u64, must_env, validate_http_endpoint},
};

/// Model used when `OPENAI_API_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// API base used when `OPENAI_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// Constructs the chat-completion config from environment.
///
/// # Errors
///
/// - [`crate::ConfigError::MissingVar`] if `OPENAI_API_KEY` is absent/empty
/// - [`crate::ConfigError::InvalidFormat`] if `OPENAI_API_BASE` lacks an
///   http/https scheme
/// - [`crate::ConfigError::InvalidNumber`] if a numeric variable fails to
///   parse
///
/// # Defaults
/// - `timeout_secs = Some(60)` when `LLM_TIMEOUT_SECS` is unset
pub fn config_openai() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;

    let model = std::env::var("OPENAI_API_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let endpoint = std::env::var("OPENAI_API_BASE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    validate_http_endpoint("OPENAI_API_BASE", &endpoint)?;

    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.or(Some(60));

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        timeout_secs,
    })
}
