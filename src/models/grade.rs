//! Nutrition quality grade
//!
//! Ordinal grade shared by both scoring strategies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Nutrition quality grade, A best
///
/// The derived ordering follows declaration order, so A < B < C < D < E and
/// the maximum of a set of grades is the worst one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worst grade among a set of grades
///
/// Used to summarize a composite record from its sub-ingredient grades. An
/// empty set yields A, the identity under "worst of".
pub fn worst_grade<I: IntoIterator<Item = Grade>>(grades: I) -> Grade {
    grades.into_iter().max().unwrap_or(Grade::A)
}
