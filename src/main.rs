//! NutriBudget Engine
//!
//! Command-line front end for the nutrition grading and catalog search
//! engine: loads a delimited catalog and answers search, grade, and keyword
//! queries against it.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use nutribudget::build_info;
use nutribudget::catalog::load_records;
use nutribudget::models::{worst_grade, Record};
use nutribudget::scoring::{grade_from_keywords, grade_record, score_profile};
use nutribudget::search::search_smart;

/// Get the catalog path from environment or use default
fn get_catalog_path() -> PathBuf {
    std::env::var("NUTRIBUDGET_CATALOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = PathBuf::from("data");
            path.push("ingredients.tsv");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr, keeping stdout for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutribudget=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // The keywords command needs no catalog
    if let Some(("keywords", words)) = args.split_first().map(|(c, w)| (c.as_str(), w)) {
        if words.is_empty() {
            eprintln!("Usage: nutribudget keywords <word>...");
            std::process::exit(1);
        }
        println!("{}", grade_from_keywords(words));
        return Ok(());
    }

    let catalog_path = get_catalog_path();
    let records = load_records(&catalog_path)?;
    tracing::info!(
        "Loaded {} records from {}",
        records.len(),
        catalog_path.display()
    );

    match args.split_first().map(|(c, w)| (c.as_str(), w)) {
        None => list_catalog(&records),
        Some(("search", [query])) => search_catalog(&records, query),
        Some(("grade", [query])) => grade_by_name(&records, query)?,
        _ => {
            eprintln!("Usage: nutribudget [search <query> | grade <name> | keywords <word>...]");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Print every record with its grade
fn list_catalog(records: &[Record]) {
    for record in records {
        println!(
            "{:>4}  {}  ${:.2}  {}",
            record.id,
            grade_record(record),
            record.cost,
            record.name
        );
    }

    let overall = worst_grade(records.iter().map(grade_record));
    println!("{} records, worst grade {}", records.len(), overall);
}

/// Resolve a query against record names and print the matches
fn search_catalog(records: &[Record], query: &str) {
    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
    let matches = search_smart(query, &names);

    if matches.is_empty() {
        println!("No matches for '{}'", query);
        return;
    }

    for name in &matches {
        if let Some(record) = records.iter().find(|r| &r.name == name) {
            println!("{}  {}", grade_record(record), record.name);
        }
    }
}

/// Resolve a record by name and print its full score report
fn grade_by_name(records: &[Record], query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
    let matches = search_smart(query, &names);

    let Some(record) = matches
        .first()
        .and_then(|name| records.iter().find(|r| &r.name == name))
    else {
        println!("No matches for '{}'", query);
        return Ok(());
    };

    if record.has_micronutrients() {
        let report = score_profile(&record.profile);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        tracing::info!("'{}' has no micronutrient data, grading from macros", record.name);
        println!("{}", grade_record(record));
    }

    Ok(())
}
