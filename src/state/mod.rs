/// State management module
///
/// This module handles all application state, including:
/// - The recipe collection store with bundled fallback (store.rs)
/// - Shared data structures (data.rs)
/// - Lookup and catalog filtering (catalog.rs)
/// - The per-recipe countdown timer (timer.rs)
/// - Notes editing and persistence (notes.rs)
/// - The detail screen session (detail.rs)

pub mod catalog;
pub mod data;
pub mod detail;
pub mod notes;
pub mod store;
pub mod timer;
