//! Data models
//!
//! Plain-data types consumed by the scoring and search engines.

mod grade;
mod nutrient;
mod profile;
mod record;

pub use grade::{worst_grade, Grade};
pub use nutrient::Nutrient;
pub use profile::NutrientProfile;
pub use record::{MacroProfile, Record};
