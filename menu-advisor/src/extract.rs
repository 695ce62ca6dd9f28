//! Menu extraction: photos in, structured dish records out.
//!
//! This step never fails: any completion-service or encoding failure
//! degrades to an empty dish list (logged at error level), and an
//! unparseable response degrades to line-based parsing. Callers must treat
//! "no dishes" as a valid, non-exceptional outcome.

use image::DynamicImage;
use tracing::{error, info, warn};

use ai_llm_service::{ChatCompletion, ChatMessage};

use crate::image_codec::to_png_data_uri;
use crate::prompts::extract_menu::{EXTRACT_TRIGGER, render_extract_menu_system_prompt};
use crate::types::Dish;

/// Upper bound on menu photos sent to the completion service per call.
pub const MAX_MENU_IMAGES: usize = 5;

/// Upper bound on dish records returned, on both parse paths.
pub const MAX_MENU_ITEMS: usize = 100;

const EXTRACT_TEMPERATURE: f32 = 0.0;

/// Extracts structured dish records from photographed menu pages.
///
/// Takes at most the first [`MAX_MENU_IMAGES`] images, sends them as image
/// parts with the extraction contract prompt at temperature 0, and parses
/// the reply as a JSON array of dishes. On a malformed reply, falls back to
/// one dish per non-blank line. Empty input returns an empty list without a
/// completion call.
pub async fn extract_menu_items(llm: &dyn ChatCompletion, images: &[DynamicImage]) -> Vec<Dish> {
    if images.is_empty() {
        warn!("no menu images provided for extraction");
        return Vec::new();
    }

    info!(count = images.len(), "processing menu images for extraction");
    let mut image_uris = Vec::with_capacity(images.len().min(MAX_MENU_IMAGES));
    for image in images.iter().take(MAX_MENU_IMAGES) {
        match to_png_data_uri(image) {
            Ok(uri) => image_uris.push(uri),
            Err(e) => {
                error!(error = %e, "failed to encode menu image");
                return Vec::new();
            }
        }
    }

    let messages = vec![
        ChatMessage::system(render_extract_menu_system_prompt()),
        ChatMessage::user_with_images(EXTRACT_TRIGGER, image_uris),
    ];

    info!("calling completion service to extract menu items");
    let response_text = match llm.chat(&messages, EXTRACT_TEMPERATURE).await {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "error extracting menu items");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Dish>>(&response_text) {
        Ok(mut dishes) => {
            dishes.truncate(MAX_MENU_ITEMS);
            info!(count = dishes.len(), "successfully extracted menu items");
            dishes
        }
        Err(_) => {
            warn!("failed to parse JSON response, falling back to line-by-line parsing");
            let dishes = parse_lines(&response_text);
            info!(count = dishes.len(), "extracted items using fallback method");
            dishes
        }
    }
}

/// Fallback parser: one dish per non-blank line, bullets and dashes
/// stripped, empty description and price.
fn parse_lines(response_text: &str) -> Vec<Dish> {
    response_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Dish {
            name: line
                .trim()
                .trim_start_matches(|c: char| c == '-' || c == '•' || c.is_whitespace())
                .to_string(),
            description: String::new(),
            price: String::new(),
        })
        .take(MAX_MENU_ITEMS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeChat;

    fn photos(n: usize) -> Vec<DynamicImage> {
        (0..n).map(|_| DynamicImage::new_rgb8(1, 1)).collect()
    }

    #[tokio::test]
    async fn empty_input_short_circuits_without_a_call() {
        let fake = FakeChat::with_default_response("[]");
        let dishes = extract_menu_items(&fake, &[]).await;
        assert!(dishes.is_empty());
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn well_formed_response_parses_into_dishes() {
        let fake = FakeChat::with_default_response(
            r#"[{"name":"Soup","description":"Hot","price":"$5"},{"name":"Pasta Carbonara","description":"Pasta with eggs, cheese, pancetta, and pepper","price":"$12.99"}]"#,
        );
        let dishes = extract_menu_items(&fake, &photos(1)).await;
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].name, "Soup");
        assert_eq!(dishes[1].price, "$12.99");
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn response_is_capped_at_max_menu_items() {
        let big: Vec<String> = (0..150)
            .map(|i| format!(r#"{{"name":"Dish {i}","description":"","price":""}}"#))
            .collect();
        let fake = FakeChat::with_default_response(&format!("[{}]", big.join(",")));
        let dishes = extract_menu_items(&fake, &photos(1)).await;
        assert_eq!(dishes.len(), MAX_MENU_ITEMS);
    }

    #[tokio::test]
    async fn malformed_response_falls_back_to_lines() {
        let fake = FakeChat::with_default_response("- Margherita Pizza\n\n• Tiramisu\n   Espresso");
        let dishes = extract_menu_items(&fake, &photos(1)).await;
        assert_eq!(dishes.len(), 3);
        assert_eq!(dishes[0].name, "Margherita Pizza");
        assert_eq!(dishes[1].name, "Tiramisu");
        assert_eq!(dishes[2].name, "Espresso");
        assert!(dishes.iter().all(|d| d.description.is_empty()));
        assert!(dishes.iter().all(|d| d.price.is_empty()));
    }

    #[tokio::test]
    async fn fallback_is_capped_at_max_menu_items() {
        let lines: Vec<String> = (0..150).map(|i| format!("Dish {i}")).collect();
        let fake = FakeChat::with_default_response(&lines.join("\n"));
        let dishes = extract_menu_items(&fake, &photos(1)).await;
        assert_eq!(dishes.len(), MAX_MENU_ITEMS);
    }

    #[tokio::test]
    async fn service_failure_degrades_to_empty_list() {
        let fake = FakeChat::failing();
        let dishes = extract_menu_items(&fake, &photos(2)).await;
        assert!(dishes.is_empty());
        assert_eq!(fake.call_count(), 1);
    }
}
