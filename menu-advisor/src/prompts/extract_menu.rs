//! Prompt template for extracting dishes from menu photos.

pub const EXTRACT_MENU_PROMPT_NAME: &str = "extract_menu";

/// Trailing text part sent after the image parts.
pub const EXTRACT_TRIGGER: &str = "Extract now.";

/// System instruction fixing the extraction output contract: a raw minified
/// JSON array, one object per dish.
pub fn render_extract_menu_system_prompt() -> String {
    r#"You are an advanced menu parser. From one or more restaurant-menu photos, output ONLY a raw minified JSON array where each element has:
`name`,
`description` - **every textual or symbolic detail** that accompanies the dish: ingredients, cooking style, allergens, icons (e.g. 🌶️ for spicy, 🥦 vegetarian), dietary tags, calories, region, side notes, etc. Consolidate them into one sentence in the original menu language.
`price` (string with currency)"#
        .to_string()
}
