use std::sync::Arc;

use ai_llm_service::ChatCompletion;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Completion client; the only upstream dependency.
    pub llm: Arc<dyn ChatCompletion>,
    /// Model identifier reported by `/health`.
    pub model: String,
}

impl AppState {
    pub fn new(llm: Arc<dyn ChatCompletion>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }
}
