/// Recipe collection storage
///
/// The full collection is persisted as one JSON document in the user's
/// data directory. A read-only default dataset is compiled into the
/// binary and used whenever the writable copy is missing or unreadable,
/// so a fresh install always has recipes to show. Every save rewrites
/// the whole document; the dataset is small (tens of recipes) and notes
/// are the only mutation, so whole-file read-modify-write keeps the
/// store trivial. Single-writer assumption: last write wins.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::task;

use super::data::Recipe;
use super::notes;

/// The default dataset shipped with the application, never modified at runtime
const BUNDLED_RECIPES: &str = include_str!("../../assets/recipes.json");

/// Errors surfaced by the recipe store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither the writable store nor the bundled dataset could be read.
    /// Fatal to catalog display; the UI shows an empty state.
    #[error("no readable recipe data in either the saved file or the bundled set")]
    DataUnavailable,
    /// The collection could not be serialized
    #[error("failed to encode recipes: {0}")]
    Parse(#[from] serde_json::Error),
    /// The writable store could not be written. Non-fatal: the in-memory
    /// update stays visible for the session but will not survive a reload.
    #[error("failed to write recipes: {0}")]
    Persist(#[from] std::io::Error),
}

/// The RecipeStore manages the writable JSON copy of the catalog
/// and the fallback to the bundled dataset.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    /// Create a store backed by the default location in the user's data directory:
    /// - Linux: ~/.local/share/mixit/recipes.json
    /// - macOS: ~/Library/Application Support/mixit/recipes.json
    /// - Windows: %APPDATA%\mixit\recipes.json
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Create a store backed by an explicit file path (used by tests)
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("mixit");
        path.push("recipes.json");
        path
    }

    /// Path to the writable store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection.
    ///
    /// Prefers the writable store; a missing or malformed writable file
    /// falls back silently to the bundled dataset. Fails only if the
    /// bundled dataset itself cannot be parsed, which should not happen
    /// in normal operation.
    pub fn load(&self) -> Result<Vec<Recipe>, StoreError> {
        if let Ok(json) = fs::read_to_string(&self.path) {
            match serde_json::from_str(&json) {
                Ok(recipes) => return Ok(recipes),
                Err(e) => {
                    eprintln!(
                        "⚠️  Saved recipe file is malformed ({}), falling back to bundled set",
                        e
                    );
                }
            }
        }
        serde_json::from_str(BUNDLED_RECIPES).map_err(|_| StoreError::DataUnavailable)
    }

    /// Serialize the entire collection and replace the writable store.
    ///
    /// Writes to a temporary sibling and renames it into place, so a
    /// subsequent `load` never observes a partially written document.
    pub fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(recipes)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Persist a notes edit for one recipe: load the full collection, replace
/// the matching record's notes, and rewrite the whole document.
///
/// Runs on a blocking thread so the UI task that awaits it never stalls
/// on file I/O. Errors are flattened to strings for the message type.
pub async fn persist_notes(store: RecipeStore, id: i64, new_notes: String) -> Result<(), String> {
    task::spawn_blocking(move || {
        let recipes = store.load().map_err(|e| e.to_string())?;
        let updated = notes::update_notes(&recipes, id, &new_notes);
        store.save(&updated).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}
