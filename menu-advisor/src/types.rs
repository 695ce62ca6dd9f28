//! Core data types shared across steps and front ends.

use serde::{Deserialize, Serialize};

/// One menu item as extracted from a photographed menu.
///
/// Immutable after extraction; later steps reference dishes, they never
/// rewrite them. Uniqueness is not enforced — duplicate names are legal.
///
/// `description` consolidates every textual or symbolic detail that
/// accompanies the dish on the menu (ingredients, cooking style, allergens,
/// iconography, dietary tags, calories, region) into one sentence in the
/// menu's original language. `price` keeps the currency symbol as printed.
/// Dishes recovered by the line-based fallback parser carry an empty
/// `description` and `price` — callers must not read meaning into either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_defaults_missing_fields_to_empty() {
        let dish: Dish = serde_json::from_str(r#"{"name":"Soup"}"#).unwrap();
        assert_eq!(dish.name, "Soup");
        assert_eq!(dish.description, "");
        assert_eq!(dish.price, "");
    }

    #[test]
    fn wire_shape_roundtrips_full_records() {
        let dish: Dish = serde_json::from_str(
            r#"{"name":"Pasta Carbonara","description":"Pasta with eggs, cheese, pancetta, and pepper","price":"$12.99"}"#,
        )
        .unwrap();
        assert_eq!(dish.price, "$12.99");
    }
}
