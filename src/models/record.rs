//! Catalog record model
//!
//! Represents an ingredient or recipe as the scoring and search engines
//! consume it: plain data, no storage or UI concerns attached.

use serde::{Deserialize, Serialize};

use super::NutrientProfile;

/// Macronutrient view of a record
///
/// Used when a full nutrient breakdown is unavailable, e.g. for records
/// sourced from a catalog that only reports calories and macros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    pub calories: u32,
    pub protein: u32, // grams
    pub carbs: u32,   // grams
    pub fat: f64,     // grams
}

/// A catalog record (ingredient or recipe)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub cost: f64,
    pub macros: MacroProfile,
    /// Micronutrient breakdown; empty when the data source reports none
    #[serde(default)]
    pub profile: NutrientProfile,
    pub description: Option<String>,
}

impl Record {
    /// True when the record carries any micronutrient data
    pub fn has_micronutrients(&self) -> bool {
        !self.profile.is_empty()
    }
}
