//! POST /recommend — final ranked recommendation for the full history.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::info;

use menu_advisor::recommend_dishes;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::recommend::recommend_request::{RecommendRequest, RecommendResponse},
};

/// Handler: POST /recommend
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/recommend \
///   -H 'content-type: application/json' \
///   -d '{"dishes":[{"name":"Soup","description":"Hot","price":"$5"}],"qa":["Q?","A"],"language":"English"}'
/// ```
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    if body.dishes.is_empty() {
        return Err(AppError::BadRequest("no dishes provided".to_string()));
    }

    info!(
        language = %body.language,
        dish_count = body.dishes.len(),
        "generating recommendations"
    );

    let recommendations =
        recommend_dishes(state.llm.as_ref(), &body.dishes, &body.qa, &body.language).await?;
    info!("successfully generated recommendations");

    Ok(Json(RecommendResponse { recommendations }))
}
