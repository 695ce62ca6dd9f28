//! Conversation state machine.
//!
//! Sequences the three steps across turns: extraction once, question
//! generation repeatedly (bounded by [`MAX_QUESTIONS`]), recommendation
//! once. The state is an explicit value owned by the caller — the REST API
//! round-trips it per request, the chat front end keeps one per session —
//! so nothing here is global or shared.
//!
//! Invariant on `qa`: even-indexed entries (0-based) are bot questions,
//! odd-indexed are user answers; after a successful turn the sequence ends
//! with a bot line. A failed turn rolls its answer back so the invariant
//! survives and the turn can be retried.

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use ai_llm_service::ChatCompletion;

use crate::error::AdvisorError;
use crate::extract::extract_menu_items;
use crate::question::{QuestionOptions, generate_next_question, next_question_number};
use crate::recommend::recommend_dishes;
use crate::types::Dish;

/// Number of answered turns after which the recommendation is issued.
pub const MAX_QUESTIONS: usize = 5;

/// Position in the fixed three-phase lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// No menu processed yet.
    Await,
    /// Extraction succeeded; questions are being asked.
    Asking,
    /// Recommendation issued; terminal.
    Done,
}

/// Per-conversation state, threaded through each turn-handling call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationState {
    pub stage: Stage,
    pub language: String,
    pub dishes: Vec<Dish>,
    pub qa: Vec<String>,
}

/// Result of the start action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Extraction succeeded; the contained string is the first question.
    Started(String),
    /// No images were supplied; state unchanged, warn the user.
    NoImages,
    /// No dishes could be extracted; state unchanged, warn the user.
    NoDishes,
}

/// Result of submitting one user answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A new clarifying question was appended.
    Question(String),
    /// The final recommendation was appended; the conversation is done.
    Recommendation(String),
    /// The conversation was not accepting answers; nothing changed.
    Ignored,
}

impl ConversationState {
    /// Fresh conversation awaiting a menu.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            stage: Stage::Await,
            language: language.into(),
            dishes: Vec::new(),
            qa: Vec::new(),
        }
    }

    /// Start action: extract the menu and seed the first question.
    ///
    /// The language choice sticks even when the start is rejected, so a
    /// retry keeps it. Empty images or an empty extraction result leave the
    /// stage untouched and surface a user-facing warning outcome.
    ///
    /// # Errors
    /// Propagates question-generation failures; the state is only mutated
    /// once the first question exists.
    pub async fn start(
        &mut self,
        llm: &dyn ChatCompletion,
        language: &str,
        images: &[DynamicImage],
    ) -> Result<StartOutcome, AdvisorError> {
        info!(language, "initializing conversation");
        self.language = language.to_string();

        if images.is_empty() {
            warn!("no menu images provided");
            return Ok(StartOutcome::NoImages);
        }

        let dishes = extract_menu_items(llm, images).await;
        if dishes.is_empty() {
            warn!("no dishes could be extracted from images");
            return Ok(StartOutcome::NoDishes);
        }

        info!(count = dishes.len(), "successfully extracted dishes");
        let first_question =
            generate_next_question(llm, &dishes, &[], language, QuestionOptions::default()).await?;

        self.stage = Stage::Asking;
        self.dishes = dishes;
        self.qa = vec![first_question.clone()];
        info!("conversation initialized");
        Ok(StartOutcome::Started(first_question))
    }

    /// Submit one user answer.
    ///
    /// Ignored outside [`Stage::Asking`]. Otherwise the answer is appended;
    /// once [`MAX_QUESTIONS`] turns are answered the recommendation is
    /// generated and the conversation completes, else the next question is
    /// generated.
    ///
    /// # Errors
    /// Propagates step failures after rolling the appended answer back.
    pub async fn submit_answer(
        &mut self,
        llm: &dyn ChatCompletion,
        answer: &str,
    ) -> Result<TurnOutcome, AdvisorError> {
        if self.stage != Stage::Asking {
            debug!("ignoring input - conversation not in asking stage");
            return Ok(TurnOutcome::Ignored);
        }

        info!("processing user response");
        self.qa.push(answer.to_string());

        if self.qa.len() / 2 >= MAX_QUESTIONS {
            info!(
                max_questions = MAX_QUESTIONS,
                "reached max questions, generating final recommendations"
            );
            let recommendation =
                match recommend_dishes(llm, &self.dishes, &self.qa, &self.language).await {
                    Ok(text) => text,
                    Err(e) => {
                        self.qa.pop();
                        return Err(e);
                    }
                };
            self.qa.push(recommendation.clone());
            self.stage = Stage::Done;
            info!("conversation completed");
            Ok(TurnOutcome::Recommendation(recommendation))
        } else {
            info!(
                number = next_question_number(&self.qa),
                max_questions = MAX_QUESTIONS,
                "generating next question"
            );
            let question = match generate_next_question(
                llm,
                &self.dishes,
                &self.qa,
                &self.language,
                QuestionOptions::default(),
            )
            .await
            {
                Ok(text) => text,
                Err(e) => {
                    self.qa.pop();
                    return Err(e);
                }
            };
            self.qa.push(question.clone());
            Ok(TurnOutcome::Question(question))
        }
    }
}

/// Reassembles the accumulated history into display pairs: the opening bot
/// line has no user line; every following (user, bot) pair is one turn.
pub fn transcript(qa: &[String]) -> Vec<(Option<String>, String)> {
    let Some(first) = qa.first() else {
        return Vec::new();
    };
    let mut pairs = vec![(None, first.clone())];
    pairs.extend(
        qa[1..]
            .chunks_exact(2)
            .map(|turn| (Some(turn[0].clone()), turn[1].clone())),
    );
    pairs
}
