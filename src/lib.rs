//! NutriBudget Engine Library
//!
//! Nutrition grading and catalog search for NutriBudget.

pub mod build_info;
pub mod catalog;
pub mod models;
pub mod scoring;
pub mod search;
