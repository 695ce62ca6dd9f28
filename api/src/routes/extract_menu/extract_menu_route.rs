//! POST /extract_menu — menu photos in, structured dishes out.

use std::sync::Arc;

use axum::{Json, extract::Multipart, extract::State};
use image::DynamicImage;
use tracing::info;

use menu_advisor::extract_menu_items;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::extract_menu::extract_menu_response::ExtractMenuResponse,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Handler: POST /extract_menu
///
/// Accepts one or more image files under the `files` field. An empty file
/// list is a client error; an undecodable image is a client error; an
/// extraction that finds nothing is a normal `{"dishes": []}` response.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/extract_menu \
///   -F 'files=@menu-page-1.jpg' -F 'files=@menu-page-2.jpg'
/// ```
pub async fn extract_menu(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<ExtractMenuResponse>> {
    let mut images: Vec<DynamicImage> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name != "files" {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read image: {e}")))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "image too large, max size is {MAX_IMAGE_SIZE} bytes"
            )));
        }

        let image = image::load_from_memory(&data)
            .map_err(|e| AppError::BadRequest(format!("could not decode image: {e}")))?;
        images.push(image);
    }

    if images.is_empty() {
        return Err(AppError::BadRequest("no files provided".to_string()));
    }

    info!(count = images.len(), "processing images for menu extraction");
    let dishes = extract_menu_items(state.llm.as_ref(), &images).await;
    info!(count = dishes.len(), "successfully extracted menu items");

    Ok(Json(ExtractMenuResponse { dishes }))
}
