use serde::Serialize;

use menu_advisor::Dish;

/// Response payload for /extract_menu.
#[derive(Debug, Serialize)]
pub struct ExtractMenuResponse {
    /// Structured dish records; empty when nothing could be extracted.
    pub dishes: Vec<Dish>,
}
