//! Prompt template for generating one clarifying question.

use crate::types::Dish;

pub const NEXT_QUESTION_PROMPT_NAME: &str = "next_question";

/// System instruction pinning the reply language and the waiter persona.
pub fn render_question_system_prompt(language: &str) -> String {
    format!("Reply ONLY in {language} as an attentive waiter.")
}

/// User instruction: menu excerpt + prior Q&A transcript + the ask for
/// exactly one new bare-sentence question.
pub fn render_next_question_prompt(dishes: &[Dish], qa: &[String]) -> String {
    format!(
        "Menu excerpt: {}.\n{}\nAsk ONE concise new question that targets an undecided preference. Avoid repeating topics. Return only the sentence.",
        menu_summary(dishes),
        qa_transcript(qa),
    )
}

/// One-sentence dish summary: `name: description`, semicolon-joined.
fn menu_summary(dishes: &[Dish]) -> String {
    dishes
        .iter()
        .map(|dish| format!("{}: {}", dish.name, dish.description))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Prior turns reconstructed by pairing even-indexed questions with
/// odd-indexed answers.
fn qa_transcript(qa: &[String]) -> String {
    qa.iter()
        .step_by(2)
        .zip(qa.iter().skip(1).step_by(2))
        .enumerate()
        .map(|(i, (question, answer))| format!("Q{n}: {question}\nA{n}: {answer}", n = i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dishes() -> Vec<Dish> {
        vec![
            Dish {
                name: "Soup".into(),
                description: "Hot".into(),
                price: "$5".into(),
            },
            Dish {
                name: "Pasta".into(),
                description: "Italian dish".into(),
                price: "".into(),
            },
        ]
    }

    #[test]
    fn summary_joins_dishes_with_semicolons() {
        let prompt = render_next_question_prompt(&dishes(), &[]);
        assert!(prompt.contains("Menu excerpt: Soup: Hot; Pasta: Italian dish."));
    }

    #[test]
    fn transcript_pairs_questions_with_answers() {
        let qa = vec![
            "What cuisine do you prefer?".to_string(),
            "I like Italian".to_string(),
            "Spicy or mild?".to_string(),
            "Mild".to_string(),
        ];
        let prompt = render_next_question_prompt(&dishes(), &qa);
        assert!(prompt.contains("Q1: What cuisine do you prefer?\nA1: I like Italian"));
        assert!(prompt.contains("Q2: Spicy or mild?\nA2: Mild"));
    }

    #[test]
    fn dangling_question_is_left_out_of_transcript() {
        let qa = vec!["Only a question, no answer yet?".to_string()];
        let prompt = render_next_question_prompt(&dishes(), &qa);
        assert!(!prompt.contains("Q1:"));
    }
}
