//! POST /next_question — one clarifying question for the current history.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::info;

use menu_advisor::{QuestionOptions, generate_next_question};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::next_question::next_question_request::{NextQuestionRequest, NextQuestionResponse},
};

/// Handler: POST /next_question
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/next_question \
///   -H 'content-type: application/json' \
///   -d '{"dishes":[{"name":"Soup","description":"Hot","price":"$5"}],"qa":[],"language":"English"}'
/// ```
pub async fn next_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NextQuestionRequest>,
) -> AppResult<Json<NextQuestionResponse>> {
    if body.dishes.is_empty() {
        return Err(AppError::BadRequest("no dishes provided".to_string()));
    }

    info!(
        language = %body.language,
        dish_count = body.dishes.len(),
        "generating next question"
    );

    let question = generate_next_question(
        state.llm.as_ref(),
        &body.dishes,
        &body.qa,
        &body.language,
        QuestionOptions::default(),
    )
    .await?;

    Ok(Json(NextQuestionResponse { question }))
}
