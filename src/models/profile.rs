//! Nutrient profile model
//!
//! Per-record nutrient amounts, keyed by the closed nutrient enumeration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Nutrient;

/// Measured nutrient amounts for a single record
///
/// A nutrient without an entry is absent, which is distinct from an entry of
/// 0.0: absence means the data source did not report the nutrient. Scoring
/// treats absent nutrients as 0 via [`NutrientProfile::amount`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientProfile {
    amounts: BTreeMap<Nutrient, f64>,
}

impl NutrientProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measured amount for a nutrient
    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.amounts.insert(nutrient, amount);
    }

    /// Measured amount, or None when the nutrient is absent
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.amounts.get(&nutrient).copied()
    }

    /// Amount for scoring: absent nutrients count as 0
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).unwrap_or(0.0)
    }

    /// True when no nutrient has been recorded
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Number of recorded nutrients
    pub fn len(&self) -> usize {
        self.amounts.len()
    }
}

impl FromIterator<(Nutrient, f64)> for NutrientProfile {
    fn from_iter<I: IntoIterator<Item = (Nutrient, f64)>>(iter: I) -> Self {
        Self {
            amounts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_nutrient_defaults_to_zero() {
        let profile = NutrientProfile::new();
        assert_eq!(profile.get(Nutrient::Iron), None);
        assert_eq!(profile.amount(Nutrient::Iron), 0.0);
    }

    #[test]
    fn test_explicit_zero_is_distinct_from_absent() {
        let mut profile = NutrientProfile::new();
        profile.set(Nutrient::Iron, 0.0);
        assert_eq!(profile.get(Nutrient::Iron), Some(0.0));
        assert_eq!(profile.get(Nutrient::Zinc), None);
        // Both score the same way
        assert_eq!(profile.amount(Nutrient::Iron), 0.0);
        assert_eq!(profile.amount(Nutrient::Zinc), 0.0);
    }

    #[test]
    fn test_set_overwrites() {
        let mut profile = NutrientProfile::new();
        profile.set(Nutrient::VitaminC, 45.0);
        profile.set(Nutrient::VitaminC, 90.0);
        assert_eq!(profile.get(Nutrient::VitaminC), Some(90.0));
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let profile: NutrientProfile =
            [(Nutrient::Fiber, 12.0), (Nutrient::Calcium, 300.0)].into_iter().collect();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.amount(Nutrient::Fiber), 12.0);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let profile: NutrientProfile = [(Nutrient::VitaminB12, 2.4)].into_iter().collect();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"vitamin_b12":2.4}"#);
    }
}
