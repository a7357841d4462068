/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the storage layer and the UI layer.

use serde::{Deserialize, Serialize};

/// A single cocktail recipe in the catalog
///
/// The field names in the persisted JSON match the bundled dataset
/// (`id`, `name`, `ingredients`, `instructions`, `timer`, `category`,
/// `alcoholic`, `notes`, `imageUrl`). Everything except `notes` is
/// read-only reference data shipped with the application.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Unique, stable identifier used for lookup and update matching
    pub id: i64,
    /// Display name (e.g., "Old Fashioned")
    pub name: String,
    /// Ordered ingredient lines; order is meaningful for display
    pub ingredients: Vec<String>,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Preparation countdown in seconds; 0 means "no timer for this recipe"
    pub timer: u32,
    /// Category label, conventionally "Easy" or "Hard" (compared case-insensitively)
    pub category: String,
    /// Whether the recipe contains alcohol
    pub alcoholic: bool,
    /// User-authored notes, the only field mutated after initial load
    #[serde(default)]
    pub notes: String,
    /// Optional image URL; None or empty means "show placeholder"
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Whether this recipe has a preparation timer worth showing
    pub fn has_timer(&self) -> bool {
        self.timer > 0
    }

    /// Format the share text for the outbound "send ingredients" action:
    /// a bulleted ingredient list followed by the instructions.
    pub fn share_message(&self) -> String {
        let mut message = format!("Ingredients for {}:\n", self.name);
        for ingredient in &self.ingredients {
            message.push_str("\u{2022} ");
            message.push_str(ingredient);
            message.push('\n');
        }
        message.push_str("\nInstructions:\n");
        message.push_str(&self.instructions);
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            id: 7,
            name: "Gin Fizz".to_string(),
            ingredients: vec!["50 ml gin".to_string(), "Soda water".to_string()],
            instructions: "Shake hard, strain, top with soda.".to_string(),
            timer: 60,
            category: "Easy".to_string(),
            alcoholic: true,
            notes: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        // The persisted schema uses camelCase only for the image field
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"alcoholic\""));
        assert!(json.contains("\"timer\":60"));
    }

    #[test]
    fn test_missing_notes_defaults_to_empty() {
        let json = r#"{
            "id": 1,
            "name": "Mojito",
            "ingredients": ["Rum"],
            "instructions": "Stir.",
            "timer": 0,
            "category": "Easy",
            "alcoholic": true,
            "imageUrl": null
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.notes, "");
    }

    #[test]
    fn test_roundtrip_preserves_unicode_notes() {
        let mut recipe = sample();
        recipe.notes = "mniej cukru ☺".to_string();
        let json = serde_json::to_string(&recipe).unwrap();
        let restored: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(recipe, restored);
    }

    #[test]
    fn test_share_message_format() {
        let message = sample().share_message();
        assert_eq!(
            message,
            "Ingredients for Gin Fizz:\n\u{2022} 50 ml gin\n\u{2022} Soda water\n\nInstructions:\nShake hard, strain, top with soda."
        );
    }
}
