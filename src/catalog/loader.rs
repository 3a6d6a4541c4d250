//! Catalog ingestion
//!
//! Parses tab-delimited catalog rows into records. Row layout:
//!
//! ```text
//! 0 id  1 name  2 cost  3 calories  4 protein  5 carbs  6 fat
//! 7 description  8 image path (skipped)  9..=39 optional nutrient columns
//! ```
//!
//! The nutrient tail covers the tracked set in enumeration order (vitamins,
//! minerals, fiber); the protein entry mirrors the macro protein column.
//! Malformed or missing fields are treated as absent, never as errors: only
//! failing to read the file itself is an error.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::{MacroProfile, Nutrient, NutrientProfile, Record};

/// Catalog loading error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Index of the first nutrient tail column (vitamin A)
const NUTRIENT_COLUMNS_START: usize = 9;

/// Tail columns in order: every tracked nutrient except protein
fn tail_nutrients() -> impl Iterator<Item = Nutrient> {
    Nutrient::ALL
        .into_iter()
        .filter(|n| *n != Nutrient::Protein)
}

/// Load all records from a tab-delimited catalog file
///
/// The first line is a header and is skipped, as are blank lines.
pub fn load_records<P: AsRef<Path>>(path: P) -> CatalogResult<Vec<Record>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_catalog(&contents))
}

/// Parse catalog text (header line included) into records
pub fn parse_catalog(contents: &str) -> Vec<Record> {
    contents
        .lines()
        .skip(1) // header
        .filter(|line| !line.trim().is_empty())
        .map(parse_row)
        .collect()
}

/// Parse a single catalog row
fn parse_row(line: &str) -> Record {
    let fields: Vec<&str> = line.split('\t').collect();

    let macros = MacroProfile {
        calories: parse_u32(fields.get(3)),
        protein: parse_u32(fields.get(4)),
        carbs: parse_u32(fields.get(5)),
        fat: parse_f64(fields.get(6)).unwrap_or(0.0),
    };

    let mut profile = NutrientProfile::new();
    for (offset, nutrient) in tail_nutrients().enumerate() {
        if let Some(value) = parse_f64(fields.get(NUTRIENT_COLUMNS_START + offset)) {
            profile.set(nutrient, value);
        }
    }

    // The comprehensive model also tracks protein; rows that carry any
    // micronutrient data mirror it from the macro column.
    if !profile.is_empty() {
        profile.set(Nutrient::Protein, f64::from(macros.protein));
    }

    Record {
        id: parse_i64(fields.first()),
        name: fields
            .get(1)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or_else(|| "Unknown".to_string(), String::from),
        cost: parse_f64(fields.get(2)).unwrap_or(0.0),
        macros,
        profile,
        description: fields
            .get(7)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from),
    }
}

/// Parse an optional numeric field; unparseable text is absent
fn parse_f64(field: Option<&&str>) -> Option<f64> {
    let text = field?.trim();
    if text.is_empty() {
        return None;
    }

    match text.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring unparseable numeric field: '{}'", text);
            None
        }
    }
}

fn parse_u32(field: Option<&&str>) -> u32 {
    let Some(text) = field.map(|s| s.trim()).filter(|s| !s.is_empty()) else {
        return 0;
    };

    match text.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Ignoring unparseable numeric field: '{}'", text);
            0
        }
    }
}

fn parse_i64(field: Option<&&str>) -> i64 {
    field
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}
