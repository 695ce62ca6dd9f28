use serde::{Deserialize, Serialize};

use menu_advisor::Dish;

/// Request payload for /recommend.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Dishes extracted earlier; resent by the caller on every call.
    pub dishes: Vec<Dish>,
    /// Full alternating question/answer history.
    #[serde(default)]
    pub qa: Vec<String>,
    /// Reply language for the recommendation.
    pub language: String,
}

/// Response payload for /recommend.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    /// Ranked top-3 recommendation as free prose/markdown.
    pub recommendations: String,
}
