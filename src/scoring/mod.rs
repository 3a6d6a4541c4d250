//! Nutrition scoring module
//!
//! Two independent grading strategies: comprehensive micronutrient scoring
//! (higher totals are better) and heuristic macro/keyword scoring (lower
//! penalties are better). They use disjoint band tables and never call each
//! other.

pub mod comprehensive;
pub mod heuristic;
pub mod ranges;

pub use comprehensive::{
    grade_from_score, score_nutrient, score_profile, ComprehensiveScore, NutrientScore,
};
pub use heuristic::{grade_from_keywords, grade_from_macros};
pub use ranges::NutrientRange;

use crate::models::{Grade, Record};

/// Grade a record with the richest strategy its data supports
///
/// Records carrying micronutrient data go through the comprehensive model;
/// macro-only records fall back to the heuristic path.
pub fn grade_record(record: &Record) -> Grade {
    if record.has_micronutrients() {
        score_profile(&record.profile).grade
    } else {
        grade_from_macros(&record.macros)
    }
}
