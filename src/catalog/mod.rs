//! Catalog module
//!
//! Ingestion of delimited catalog files into records.

pub mod loader;

pub use loader::{load_records, parse_catalog, CatalogError, CatalogResult};
