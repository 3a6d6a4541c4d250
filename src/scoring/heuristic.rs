//! Heuristic macro and keyword grading
//!
//! Degraded grading paths for records lacking a micronutrient breakdown.
//! These scores are penalties: lower is better, the opposite polarity of the
//! comprehensive path, with a band table of its own. The two paths must not
//! share grading tables.

use crate::models::{Grade, MacroProfile};

/// Calorie penalty: one point per 80 kcal band, capped at 10
fn calorie_score(calories: u32) -> i32 {
    (calories / 80).min(10) as i32
}

/// Fat penalty: one point per 3 g, capped at 10
fn fat_score(fat: f64) -> i32 {
    if fat <= 0.0 {
        return 0;
    }
    ((fat / 3.0).floor() as i32).min(10)
}

/// Sugar proxy penalty from total carbohydrates: one point per 5 g, capped at 10
fn sugar_score(carbs: u32) -> i32 {
    (carbs / 5).min(10) as i32
}

/// Protein bonus: one point per 5 g, capped at 5
fn protein_score(protein: u32) -> i32 {
    (protein / 5).min(5) as i32
}

/// Penalty bands: -1 and below is an A, above 18 an E
fn grade_from_penalty(score: i32) -> Grade {
    if score <= -1 {
        Grade::A
    } else if score <= 2 {
        Grade::B
    } else if score <= 10 {
        Grade::C
    } else if score <= 18 {
        Grade::D
    } else {
        Grade::E
    }
}

/// Grade a record from its macronutrients alone
///
/// Calories, fat, and carbohydrates (as a crude sugar proxy) accumulate
/// penalty points; protein subtracts a bonus.
pub fn grade_from_macros(macros: &MacroProfile) -> Grade {
    let negative =
        calorie_score(macros.calories) + fat_score(macros.fat) + sugar_score(macros.carbs);
    let positive = protein_score(macros.protein);

    grade_from_penalty(negative - positive)
}

/// Grade a record from descriptive nutrient keywords alone
///
/// Case-insensitive substring matching per token: fiber and whole-grain
/// mentions earn a bonus, protein a smaller one; sugar, fat, and saturated
/// mentions accumulate penalties.
pub fn grade_from_keywords<S: AsRef<str>>(words: &[S]) -> Grade {
    let mut positive = 0;
    let mut negative = 0;

    for word in words {
        let word = word.as_ref().to_lowercase();

        if word.contains("fiber") || word.contains("whole grain") {
            positive += 2;
        }
        if word.contains("protein") {
            positive += 1;
        }

        if word.contains("sugar") {
            negative += 2;
        }
        if word.contains("fat") || word.contains("saturated") {
            negative += 2;
        }
    }

    grade_from_penalty(negative - positive)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn macros(calories: u32, protein: u32, carbs: u32, fat: f64) -> MacroProfile {
        MacroProfile {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    #[test]
    fn test_lean_high_protein_grades_a() {
        // 70 kcal -> 0, fat 0, carbs 0, protein 25 -> bonus 5; final -5
        assert_eq!(grade_from_macros(&macros(70, 25, 0, 0.0)), Grade::A);
    }

    #[test]
    fn test_zero_macros_grade_b() {
        // No penalties and no bonus lands at 0, inside the B band
        assert_eq!(grade_from_macros(&macros(0, 0, 0, 0.0)), Grade::B);
    }

    #[test]
    fn test_dense_dessert_grades_e() {
        // 800 kcal -> 10, fat 30 g -> 10, carbs 50 g -> 10; final 30
        assert_eq!(grade_from_macros(&macros(800, 0, 50, 30.0)), Grade::E);
    }

    #[test]
    fn test_penalty_band_boundaries() {
        // Carbs alone give fine-grained control of the final score
        assert_eq!(grade_from_macros(&macros(0, 5, 0, 0.0)), Grade::A); // -1
        assert_eq!(grade_from_macros(&macros(0, 0, 10, 0.0)), Grade::B); // 2
        assert_eq!(grade_from_macros(&macros(0, 0, 15, 0.0)), Grade::C); // 3
        assert_eq!(grade_from_macros(&macros(0, 0, 50, 0.0)), Grade::C); // 10
        assert_eq!(grade_from_macros(&macros(80, 0, 50, 0.0)), Grade::D); // 11
        assert_eq!(grade_from_macros(&macros(640, 0, 50, 0.0)), Grade::D); // 18
        assert_eq!(grade_from_macros(&macros(720, 0, 50, 0.0)), Grade::E); // 19
    }

    #[test]
    fn test_calorie_bands_are_80_kcal_wide() {
        // 79 kcal is band 0, 80 is band 1, 800+ caps at 10
        assert_eq!(grade_from_macros(&macros(79, 0, 0, 0.0)), Grade::B);
        assert_eq!(grade_from_macros(&macros(80, 0, 0, 0.0)), Grade::B); // 1
        assert_eq!(grade_from_macros(&macros(9999, 0, 0, 0.0)), Grade::C); // capped at 10
    }

    #[test]
    fn test_fat_score_floors_and_caps() {
        // 8.9 g -> floor(2.96) = 2 points
        assert_eq!(grade_from_macros(&macros(0, 0, 0, 8.9)), Grade::B);
        // 90 g would be 30 points uncapped; cap keeps it at 10
        assert_eq!(grade_from_macros(&macros(0, 0, 0, 90.0)), Grade::C);
    }

    #[test]
    fn test_keyword_fiber_grades_a() {
        assert_eq!(grade_from_keywords(&["fiber"]), Grade::A); // -2
        assert_eq!(grade_from_keywords(&["whole grain oats"]), Grade::A);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        assert_eq!(grade_from_keywords(&["FIBER"]), Grade::A);
        assert_eq!(grade_from_keywords(&["Added Sugar"]), Grade::B); // +2
    }

    #[test]
    fn test_keyword_penalties_accumulate() {
        // sugar +2, fat +2 -> 4
        assert_eq!(grade_from_keywords(&["sugar", "fat"]), Grade::C);
        // "saturated fat" triggers the fat rule once -> 2
        assert_eq!(grade_from_keywords(&["saturated fat"]), Grade::B);
    }

    #[test]
    fn test_keyword_protein_bonus() {
        // protein -1, sugar +2 -> 1
        assert_eq!(grade_from_keywords(&["protein", "sugar"]), Grade::B);
    }

    #[test]
    fn test_no_keywords_grade_b() {
        assert_eq!(grade_from_keywords::<&str>(&[]), Grade::B);
        assert_eq!(grade_from_keywords(&["salt", "water"]), Grade::B);
    }
}
