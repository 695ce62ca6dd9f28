/// Configuration for the chat-completion client.
///
/// Sampling temperature is intentionally absent: it is a per-call argument
/// of [`crate::ChatCompletion::chat`], because each step of the system pins
/// its own regime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmModelConfig {
    /// Model identifier string (e.g., `"gpt-4o-mini"`).
    pub model: String,

    /// API base URL (e.g., `"https://api.openai.com"`). The client appends
    /// `/v1/chat/completions` and `/v1/models` to it.
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
