use serde::{Deserialize, Serialize};

use menu_advisor::Dish;

/// Request payload for /next_question.
#[derive(Debug, Deserialize)]
pub struct NextQuestionRequest {
    /// Dishes extracted earlier; the API is stateless, so the caller
    /// resends them every call.
    pub dishes: Vec<Dish>,
    /// Alternating question/answer history, question first.
    #[serde(default)]
    pub qa: Vec<String>,
    /// Reply language for the generated question.
    pub language: String,
}

/// Response payload for /next_question.
#[derive(Debug, Serialize)]
pub struct NextQuestionResponse {
    /// One new clarifying question.
    pub question: String,
}
