//! Prompt template for the final ranked recommendation.

use crate::types::Dish;

pub const RECOMMEND_PROMPT_NAME: &str = "recommend";

/// System instruction pinning the reply language and the waiter persona.
pub fn render_recommend_system_prompt(language: &str) -> String {
    format!("Reply ONLY in {language} as a helpful waiter.")
}

/// User instruction: bulleted menu + numbered guest profile + the ask for a
/// ranked top-3 with short justifications, plain markdown only.
pub fn render_recommend_prompt(dishes: &[Dish], answers: &[&String]) -> String {
    format!(
        "Using the menu and guest profile, pick the TOP 3 matching dishes (ranked) and justify each in ≤30 words. Respond markdown without backticks and without any beginning or ending notes.\n\nMenu:\n{}\n\nGuest:\n{}",
        formatted_menu(dishes),
        guest_profile(answers),
    )
}

fn formatted_menu(dishes: &[Dish]) -> String {
    dishes
        .iter()
        .map(|dish| format!("- {}: {}", dish.name, dish.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn guest_profile(answers: &[&String]) -> String {
    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| format!("A{}: {}", i + 1, answer))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_is_bulleted_and_profile_numbered() {
        let dishes = vec![Dish {
            name: "Pizza".into(),
            description: "Another Italian favorite".into(),
            price: "$10".into(),
        }];
        let first = "Yes, I love it!".to_string();
        let prompt = render_recommend_prompt(&dishes, &[&first]);
        assert!(prompt.contains("Menu:\n- Pizza: Another Italian favorite"));
        assert!(prompt.contains("Guest:\nA1: Yes, I love it!"));
        assert!(prompt.contains("TOP 3"));
    }
}
