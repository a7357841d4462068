/// Presentation layer
///
/// Pure view builders; all state lives in `state` and in the main
/// application struct. No invariants here.

pub mod catalog;
pub mod detail;
