/// Detail screen session
///
/// One DetailSession exists per open detail view. It re-resolves the
/// full recipe from its id (the catalog only hands over the identifier),
/// owns the countdown engine for that recipe, and buffers the notes
/// draft until the user saves. The session is dropped when the screen
/// closes; the tick subscription in main.rs is keyed off the session's
/// running engine, so closing the screen also cancels pending ticks.

use super::catalog;
use super::data::Recipe;
use super::store::{RecipeStore, StoreError};
use super::timer::TimerEngine;

#[derive(Debug)]
pub struct DetailSession {
    /// The resolved recipe; None renders a visible "not found" state
    pub recipe: Option<Recipe>,
    pub timer: TimerEngine,
    /// Notes text being edited, committed on save
    pub notes_draft: String,
    /// One-line status shown under the notes editor (e.g., a failed save)
    pub status: Option<String>,
}

impl DetailSession {
    /// Open a detail session for the recipe with the given id,
    /// re-resolving the full record from the store.
    pub fn open(store: &RecipeStore, id: i64) -> Result<Self, StoreError> {
        let recipes = store.load()?;
        let recipe = catalog::find_by_id(&recipes, id).cloned();
        if recipe.is_none() {
            eprintln!("⚠️  Recipe {} not found in the loaded collection", id);
        }
        let timer = TimerEngine::new(recipe.as_ref().map_or(0, |r| r.timer));
        let notes_draft = recipe.as_ref().map_or_else(String::new, |r| r.notes.clone());

        Ok(Self {
            recipe,
            timer,
            notes_draft,
            status: None,
        })
    }

    /// Commit the notes draft into the in-memory record. The caller is
    /// responsible for launching the persist; if that fails, the
    /// in-memory update stays visible for this session regardless.
    pub fn apply_saved_notes(&mut self) {
        if let Some(recipe) = &mut self.recipe {
            recipe.notes = self.notes_draft.clone();
        }
    }

    /// The share text for this recipe, if one is loaded
    pub fn share_message(&self) -> Option<String> {
        self.recipe.as_ref().map(Recipe::share_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(dir: &tempfile::TempDir) -> RecipeStore {
        RecipeStore::at_path(dir.path().join("recipes.json"))
    }

    #[test]
    fn test_open_resolves_recipe_and_seeds_timer() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);

        let session = DetailSession::open(&store, 2).unwrap();
        let recipe = session.recipe.as_ref().unwrap();
        assert_eq!(recipe.name, "Old Fashioned");
        assert_eq!(session.timer.target(), 180);
        assert_eq!(session.notes_draft, "");
    }

    #[test]
    fn test_open_with_unknown_id_is_a_state_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);

        let session = DetailSession::open(&store, 9999).unwrap();
        assert!(session.recipe.is_none());
        assert_eq!(session.timer.target(), 0);
    }

    #[test]
    fn test_apply_saved_notes_updates_in_memory_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);

        let mut session = DetailSession::open(&store, 1).unwrap();
        session.notes_draft = "extra mint".to_string();
        session.apply_saved_notes();
        assert_eq!(session.recipe.as_ref().unwrap().notes, "extra mint");
    }

    #[test]
    fn test_open_picks_up_persisted_notes() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);

        let recipes = store.load().unwrap();
        store
            .save(&crate::state::notes::update_notes(&recipes, 1, "use raw sugar"))
            .unwrap();

        let session = DetailSession::open(&store, 1).unwrap();
        assert_eq!(session.notes_draft, "use raw sugar");
    }
}
