/// Notes editing
///
/// Notes are the only field the application mutates after initial load.
/// An edit replaces one record's notes in a copy of the collection; the
/// caller then persists the whole collection through the store.

use super::data::Recipe;

/// Produce a new collection where the record matching `id` carries the
/// new notes text and every other record is unchanged. Order preserved.
/// An unknown id returns the collection as-is.
pub fn update_notes(recipes: &[Recipe], id: i64, new_notes: &str) -> Vec<Recipe> {
    recipes
        .iter()
        .map(|recipe| {
            if recipe.id == id {
                let mut updated = recipe.clone();
                updated.notes = new_notes.to_string();
                updated
            } else {
                recipe.clone()
            }
        })
        .collect()
}
