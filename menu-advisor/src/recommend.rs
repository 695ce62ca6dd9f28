//! Final ranked recommendation.
//!
//! Consumes only the answer half of the Q&A history and returns the model's
//! prose verbatim — this step's output is free text for display, not
//! structured data. Failures propagate, same policy as question generation.

use tracing::info;

use ai_llm_service::{ChatCompletion, ChatMessage};

use crate::error::AdvisorError;
use crate::prompts::recommend::{render_recommend_prompt, render_recommend_system_prompt};
use crate::types::Dish;

const RECOMMEND_TEMPERATURE: f32 = 0.4;

/// Produces a ranked top-3 recommendation with short justifications.
///
/// # Errors
/// Propagates [`AdvisorError::Completion`] when the completion service
/// fails.
pub async fn recommend_dishes(
    llm: &dyn ChatCompletion,
    dishes: &[Dish],
    qa: &[String],
    language: &str,
) -> Result<String, AdvisorError> {
    info!(
        language,
        dish_count = dishes.len(),
        turns = qa.len() / 2,
        "generating dish recommendations"
    );

    let answers: Vec<&String> = qa.iter().skip(1).step_by(2).collect();
    let messages = vec![
        ChatMessage::system(render_recommend_system_prompt(language)),
        ChatMessage::user(render_recommend_prompt(dishes, &answers)),
    ];

    let response = llm.chat(&messages, RECOMMEND_TEMPERATURE).await?;
    info!("successfully generated dish recommendations");
    Ok(response)
}
