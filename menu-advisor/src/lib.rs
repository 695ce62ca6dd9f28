//! Domain core of the menu advisor.
//!
//! Given photos of a restaurant menu, the crate extracts structured dish
//! records, asks a bounded sequence of clarifying questions, and produces a
//! ranked recommendation. All language work is delegated to a chat
//! completion client behind [`ai_llm_service::ChatCompletion`]; this crate
//! owns the prompt contracts and the conversation state machine.
//!
//! Pipeline: [`extract::extract_menu_items`] once, then
//! [`question::generate_next_question`] repeatedly (bounded by
//! [`conversation::MAX_QUESTIONS`]), then [`recommend::recommend_dishes`]
//! once — sequenced across turns by [`conversation::ConversationState`].

pub mod conversation;
pub mod error;
pub mod extract;
pub mod image_codec;
pub mod prompts;
pub mod question;
pub mod recommend;
pub mod types;

pub use conversation::{ConversationState, MAX_QUESTIONS, Stage, StartOutcome, TurnOutcome};
pub use error::AdvisorError;
pub use extract::{MAX_MENU_IMAGES, MAX_MENU_ITEMS, extract_menu_items};
pub use image_codec::ImageInput;
pub use question::{QuestionOptions, generate_next_question, next_question_number};
pub use recommend::recommend_dishes;
pub use types::Dish;

#[cfg(test)]
pub(crate) mod test_support;
