//! Comprehensive micronutrient scoring
//!
//! Scores a full nutrient profile against the reference intake table and
//! maps the point total to a letter grade. On this path higher totals are
//! better; the heuristic path in [`super::heuristic`] uses the opposite
//! polarity and its own band table, and the two must stay independent.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Grade, Nutrient, NutrientProfile};

/// Score detail for a single nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientScore {
    /// Measured amount (0 when absent from the profile)
    pub value: f64,
    /// Points awarded, 0-5
    pub score: u8,
}

/// Full scoring result for a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComprehensiveScore {
    /// Sum of per-nutrient points across all tracked nutrients
    pub total: u32,
    pub grade: Grade,
    /// Per-nutrient breakdown, covering the full tracked set
    pub nutrients: BTreeMap<Nutrient, NutrientScore>,
}

/// Score a single nutrient amount against its recommended daily intake
///
/// Awards 0-5 points by the fraction of the RDI covered: a full RDI or more
/// earns 5, with one point lost per 20% shortfall band. Non-positive amounts
/// score 0 rather than being rejected.
///
/// The upper limit is part of the reference data but is not read here:
/// only shortfall is penalized, never overconsumption.
///
/// # Panics
///
/// Panics if `rdi` is not positive.
pub fn score_nutrient(value: f64, rdi: f64, _upper_limit: f64) -> u8 {
    assert!(rdi > 0.0, "nutrient RDI must be positive, got {}", rdi);

    if value <= 0.0 {
        return 0;
    }

    let pct = value / rdi;
    if pct >= 1.0 {
        5
    } else if pct >= 0.8 {
        4
    } else if pct >= 0.6 {
        3
    } else if pct >= 0.4 {
        2
    } else if pct >= 0.2 {
        1
    } else {
        0
    }
}

/// Score every tracked nutrient in a profile
///
/// Iterates the full nutrient set, not just the nutrients present in the
/// profile; absent nutrients contribute a value of 0 and score 0. Pure
/// function of the profile and the reference table.
pub fn score_profile(profile: &NutrientProfile) -> ComprehensiveScore {
    let mut total: u32 = 0;
    let mut nutrients = BTreeMap::new();

    for nutrient in Nutrient::ALL {
        let range = nutrient.reference_range();
        let value = profile.amount(nutrient);
        let score = score_nutrient(value, range.rdi, range.upper_limit);

        total += u32::from(score);
        nutrients.insert(nutrient, NutrientScore { value, score });
    }

    ComprehensiveScore {
        total,
        grade: grade_from_score(total),
        nutrients,
    }
}

/// Map a profile point total to a letter grade
///
/// Band lower bounds are inclusive: 50 is an A, 49 a B.
pub fn grade_from_score(total: u32) -> Grade {
    if total >= 50 {
        Grade::A
    } else if total >= 35 {
        Grade::B
    } else if total >= 20 {
        Grade::C
    } else if total >= 10 {
        Grade::D
    } else {
        Grade::E
    }
}
