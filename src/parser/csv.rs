//! Parser for delimited (CSV) statement exports
//!
//! The only format that carries its own category column, so no resolver is
//! needed. The first record is a header and is discarded.

use std::path::Path;

use crate::error::AppErrors as Error;
use crate::model::Expense;
use crate::normalize::{clean_description, normalize_numeric_string};
use crate::parser::StatementParser;

// Fixed column positions in the export.
const DESCRIPTION: usize = 3;
const CATEGORY: usize = 4;
const CREDIT: usize = 5;
const DEBIT: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct CsvParser;

impl StatementParser for CsvParser {
    #[tracing::instrument(name = "Parse CSV statement", skip(self))]
    fn parse(&self, path: &Path) -> Result<Vec<Expense>, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_path(path)?;

        let mut expenses = Vec::new();

        for record in reader.records() {
            let record = record?;

            // Blank rows are the only sanctioned skip.
            if record.iter().all(str::is_empty) {
                continue;
            }

            let description = clean_description(Some(field(&record, DESCRIPTION, "description")?));
            let category = field(&record, CATEGORY, "category")?;
            let credit = normalize_numeric_string(field(&record, CREDIT, "credit")?)?;
            let debit = normalize_numeric_string(field(&record, DEBIT, "debit")?)?;

            expenses.push(Expense::new(description, category, credit, debit));
        }

        Ok(expenses)
    }
}

fn field<'r>(record: &'r csv::StringRecord, index: usize, name: &str) -> Result<&'r str, Error> {
    record
        .get(index)
        .ok_or_else(|| Error::format_error("CSV", format!("row has no {name} column")))
}

// -- Tests ----------------------------------------------------------------------------
