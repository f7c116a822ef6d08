//! Summarise a statement file
//!
//! Parses the file selected by extension, reduces it per category and
//! prints the totals to the console.

use std::path::Path;

use colored::Colorize;
use tracing_log::log::info;

use crate::calculator::category_totals;
use crate::configuration::get_config;
use crate::error::AppErrors as Error;
use crate::parser::parse_statement;
use crate::resolver::CategoryResolver;

/// Print a category totals table for a statement file.
///
/// # Errors
/// Will return an error if the configuration can't be read or the file
/// can't be parsed.
pub fn summary(file: &Path) -> Result<(), Error> {
    let settings = get_config()?;
    let resolver = CategoryResolver::from_settings(&settings);

    let expenses = parse_statement(file, &settings, &resolver)?;
    info!("Parsed {} expenses from {}", expenses.len(), file.display());

    let totals = category_totals(&expenses)?;
    let total_cost: f64 = totals.values().sum();

    println!("{:>42}", "EXPENSES".bold());
    println!("------------------------------------------");

    for (category, cost) in &totals {
        println!("{category:<30} {cost:>10.2}");
    }

    println!("------------------------------------------");
    println!("{:<30} {:>10.2}", "Total".bold(), total_cost);

    Ok(())
}
