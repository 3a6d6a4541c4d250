//! Nutrient reference intake table
//!
//! Recommended daily intake and upper limit per tracked nutrient. The table
//! is fixed at compile time and never mutated; every grade the comprehensive
//! model produces is a pure function of the profile and these values.

use crate::models::Nutrient;

/// Reference intake range for one nutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRange {
    /// Recommended daily intake
    pub rdi: f64,
    /// Tolerable upper intake level
    pub upper_limit: f64,
}

impl Nutrient {
    /// Reference intake range for this nutrient
    pub const fn reference_range(self) -> NutrientRange {
        let (rdi, upper_limit) = match self {
            // Vitamins
            Nutrient::VitaminA => (900.0, 3000.0),
            Nutrient::VitaminB1 => (1.2, 50.0),
            Nutrient::VitaminB2 => (1.3, 50.0),
            Nutrient::VitaminB3 => (16.0, 35.0),
            Nutrient::VitaminB5 => (5.0, 1000.0),
            Nutrient::VitaminB6 => (1.3, 100.0),
            Nutrient::VitaminB7 => (30.0, 1000.0),
            Nutrient::VitaminB9 => (400.0, 1000.0),
            Nutrient::VitaminB12 => (2.4, 1000.0),
            Nutrient::VitaminC => (90.0, 2000.0),
            Nutrient::VitaminD => (20.0, 100.0),
            Nutrient::VitaminE => (15.0, 1000.0),
            Nutrient::VitaminK => (120.0, 1000.0),

            // Minerals
            Nutrient::Calcium => (1000.0, 2500.0),
            Nutrient::Phosphorus => (700.0, 4000.0),
            Nutrient::Magnesium => (400.0, 350.0), // UL applies to supplements, use carefully
            Nutrient::Sodium => (1500.0, 2300.0),
            Nutrient::Potassium => (4700.0, 5000.0),
            Nutrient::Chloride => (2300.0, 3600.0),
            Nutrient::Sulfur => (1000.0, 2000.0),
            Nutrient::Iron => (18.0, 45.0),
            Nutrient::Zinc => (11.0, 40.0),
            Nutrient::Copper => (0.9, 10.0),
            Nutrient::Manganese => (2.3, 11.0),
            Nutrient::Iodine => (150.0, 1100.0),
            Nutrient::Selenium => (55.0, 400.0),
            Nutrient::Molybdenum => (45.0, 2000.0),
            Nutrient::Chromium => (35.0, 1000.0),
            Nutrient::Fluoride => (4.0, 10.0),
            Nutrient::Cobalt => (5.0, 100.0),

            // Macronutrient bonuses
            Nutrient::Fiber => (25.0, 70.0),
            Nutrient::Protein => (50.0, 200.0),
        };

        NutrientRange { rdi, upper_limit }
    }
}
