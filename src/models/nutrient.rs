//! Nutrient identifiers
//!
//! The closed set of nutrients tracked by the comprehensive grading model.

use serde::{Deserialize, Serialize};

/// A tracked nutrient
///
/// The set is fixed: 13 vitamins, 17 minerals, fiber, and protein. An
/// identifier outside this enumeration cannot be constructed, so nutrient
/// lookups can never silently miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    // Vitamins
    VitaminA,
    VitaminB1,
    VitaminB2,
    VitaminB3,
    VitaminB5,
    VitaminB6,
    VitaminB7,
    VitaminB9,
    VitaminB12,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,

    // Minerals
    Calcium,
    Phosphorus,
    Magnesium,
    Sodium,
    Potassium,
    Chloride,
    Sulfur,
    Iron,
    Zinc,
    Copper,
    Manganese,
    Iodine,
    Selenium,
    Molybdenum,
    Chromium,
    Fluoride,
    Cobalt,

    // Macronutrient bonuses
    Fiber,
    Protein,
}

impl Nutrient {
    /// Every tracked nutrient, in catalog column order
    pub const ALL: [Nutrient; 32] = [
        Nutrient::VitaminA,
        Nutrient::VitaminB1,
        Nutrient::VitaminB2,
        Nutrient::VitaminB3,
        Nutrient::VitaminB5,
        Nutrient::VitaminB6,
        Nutrient::VitaminB7,
        Nutrient::VitaminB9,
        Nutrient::VitaminB12,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::Calcium,
        Nutrient::Phosphorus,
        Nutrient::Magnesium,
        Nutrient::Sodium,
        Nutrient::Potassium,
        Nutrient::Chloride,
        Nutrient::Sulfur,
        Nutrient::Iron,
        Nutrient::Zinc,
        Nutrient::Copper,
        Nutrient::Manganese,
        Nutrient::Iodine,
        Nutrient::Selenium,
        Nutrient::Molybdenum,
        Nutrient::Chromium,
        Nutrient::Fluoride,
        Nutrient::Cobalt,
        Nutrient::Fiber,
        Nutrient::Protein,
    ];

    /// Identifier string, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::VitaminA => "vitamin_a",
            Nutrient::VitaminB1 => "vitamin_b1",
            Nutrient::VitaminB2 => "vitamin_b2",
            Nutrient::VitaminB3 => "vitamin_b3",
            Nutrient::VitaminB5 => "vitamin_b5",
            Nutrient::VitaminB6 => "vitamin_b6",
            Nutrient::VitaminB7 => "vitamin_b7",
            Nutrient::VitaminB9 => "vitamin_b9",
            Nutrient::VitaminB12 => "vitamin_b12",
            Nutrient::VitaminC => "vitamin_c",
            Nutrient::VitaminD => "vitamin_d",
            Nutrient::VitaminE => "vitamin_e",
            Nutrient::VitaminK => "vitamin_k",
            Nutrient::Calcium => "calcium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Sodium => "sodium",
            Nutrient::Potassium => "potassium",
            Nutrient::Chloride => "chloride",
            Nutrient::Sulfur => "sulfur",
            Nutrient::Iron => "iron",
            Nutrient::Zinc => "zinc",
            Nutrient::Copper => "copper",
            Nutrient::Manganese => "manganese",
            Nutrient::Iodine => "iodine",
            Nutrient::Selenium => "selenium",
            Nutrient::Molybdenum => "molybdenum",
            Nutrient::Chromium => "chromium",
            Nutrient::Fluoride => "fluoride",
            Nutrient::Cobalt => "cobalt",
            Nutrient::Fiber => "fiber",
            Nutrient::Protein => "protein",
        }
    }
}
