//! Catalog search module
//!
//! Resolves free-text queries against record names: exact substring search,
//! Levenshtein-based fuzzy search, and the exact-first smart composition.

pub mod engine;
pub mod levenshtein;

pub use engine::{search_exact, search_fuzzy, search_smart, SMART_FUZZY_THRESHOLD};
pub use levenshtein::{levenshtein_distance, similarity};
