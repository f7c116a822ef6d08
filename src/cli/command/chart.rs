//! Chart data export
//!
//! Produces the hierarchy arrays for sunburst rendering plus flat pie data,
//! serialised as JSON for the external renderer.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing_log::log::info;

use crate::calculator::{category_totals, expense_totals};
use crate::chart::{pie_data, sunburst_data, PieData, SunburstData};
use crate::configuration::get_config;
use crate::error::AppErrors as Error;
use crate::parser::parse_statement;
use crate::resolver::CategoryResolver;

#[derive(Debug, Serialize)]
struct ChartData {
    sunburst: SunburstData,
    pie: PieData,
}

/// Write chart data for a statement file to `output`, or stdout when no
/// path is given.
///
/// # Errors
/// Will return an error if the configuration can't be read, the file can't
/// be parsed, or the output can't be written.
pub fn chart(file: &Path, output: Option<&Path>) -> Result<(), Error> {
    let settings = get_config()?;
    let resolver = CategoryResolver::from_settings(&settings);

    let expenses = parse_statement(file, &settings, &resolver)?;
    let categories = category_totals(&expenses)?;
    let per_expense = expense_totals(&expenses)?;

    let data = ChartData {
        sunburst: sunburst_data(&categories, &per_expense),
        pie: pie_data(&categories),
    };
    let json = serde_json::to_string_pretty(&data)?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Wrote chart data to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
