//! Clarifying-question generation.
//!
//! Produces exactly one new question per call, in the requested language,
//! steered away from topics already covered by the Q&A history. Failures
//! propagate to the caller; there is no fallback question anywhere in the
//! system.

use tracing::info;

use ai_llm_service::{ChatCompletion, ChatMessage};

use crate::error::AdvisorError;
use crate::prompts::next_question::{render_next_question_prompt, render_question_system_prompt};
use crate::types::Dish;

const QUESTION_TEMPERATURE: f32 = 0.6;

/// Post-conditions applied to the generated question.
#[derive(Debug, Clone, Copy)]
pub struct QuestionOptions {
    /// Append a trailing `?` when the model's reply lacks one. The prompt
    /// asks for a bare question sentence, so the mark is guaranteed here
    /// rather than trusted to sampling.
    pub ensure_question_mark: bool,
}

impl Default for QuestionOptions {
    fn default() -> Self {
        Self {
            ensure_question_mark: true,
        }
    }
}

/// Number of the question that would be asked next, given the history.
///
/// Observability only — the value never feeds prompt content.
pub fn next_question_number(qa: &[String]) -> usize {
    qa.len() / 2 + 1
}

/// Generates one concise clarifying question.
///
/// # Errors
/// Propagates [`AdvisorError::Completion`] when the completion service
/// fails; the conversation state is the caller's to keep consistent.
pub async fn generate_next_question(
    llm: &dyn ChatCompletion,
    dishes: &[Dish],
    qa: &[String],
    language: &str,
    opts: QuestionOptions,
) -> Result<String, AdvisorError> {
    info!(
        number = next_question_number(qa),
        language, "generating question"
    );

    let messages = vec![
        ChatMessage::system(render_question_system_prompt(language)),
        ChatMessage::user(render_next_question_prompt(dishes, qa)),
    ];

    let mut question = llm
        .chat(&messages, QUESTION_TEMPERATURE)
        .await?
        .trim()
        .to_string();

    if opts.ensure_question_mark && !question.ends_with('?') {
        question.push('?');
    }

    info!(preview = %question.chars().take(50).collect::<String>(), "generated question");
    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeChat;

    fn dishes() -> Vec<Dish> {
        vec![Dish {
            name: "Pasta".into(),
            description: "Italian dish".into(),
            price: "".into(),
        }]
    }

    #[test]
    fn question_number_is_k_plus_one_for_2k_history() {
        assert_eq!(next_question_number(&[]), 1);
        let qa: Vec<String> = (0..6).map(|i| format!("entry {i}")).collect();
        assert_eq!(next_question_number(&qa), 4);
        assert_eq!(next_question_number(&qa[..4]), 3);
    }

    #[tokio::test]
    async fn returns_trimmed_model_reply() {
        let fake = FakeChat::with_default_response("  Would you prefer a vegetarian option?  \n");
        let question = generate_next_question(
            &fake,
            &dishes(),
            &["What cuisine do you prefer?".into(), "I like Italian".into()],
            "English",
            QuestionOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(question, "Would you prefer a vegetarian option?");
    }

    #[tokio::test]
    async fn appends_question_mark_when_missing() {
        let fake = FakeChat::with_default_response("Tell me about your dietary preferences");
        let question =
            generate_next_question(&fake, &dishes(), &[], "English", QuestionOptions::default())
                .await
                .unwrap();
        assert_eq!(question, "Tell me about your dietary preferences?");
    }

    #[tokio::test]
    async fn question_mark_postcondition_can_be_disabled() {
        let fake = FakeChat::with_default_response("Tell me about your dietary preferences");
        let question = generate_next_question(
            &fake,
            &dishes(),
            &[],
            "English",
            QuestionOptions {
                ensure_question_mark: false,
            },
        )
        .await
        .unwrap();
        assert_eq!(question, "Tell me about your dietary preferences");
    }

    #[tokio::test]
    async fn service_failure_propagates() {
        let fake = FakeChat::failing();
        let result =
            generate_next_question(&fake, &dishes(), &[], "English", QuestionOptions::default())
                .await;
        assert!(matches!(result, Err(AdvisorError::Completion(_))));
    }
}
