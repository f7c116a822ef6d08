//! Parser for QIF statement files
//!
//! QIF records are blocks of tagged lines terminated by `^`. Lines opening
//! with `!` are directives and are skipped. The format carries no category
//! data, so each payee is resolved against the category table. Amounts are
//! recorded negative (`T-46.00`); the sign is discarded because resolved
//! expenses are always a positive debit.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AppErrors as Error;
use crate::model::Expense;
use crate::normalize::normalize_numeric_string;
use crate::parser::StatementParser;
use crate::resolver::CategoryResolver;

// Fixed positions within an accumulated block.
const AMOUNT_FIELD: usize = 1;
const PAYEE_FIELD: usize = 3;

#[derive(Debug)]
pub struct QifParser<'a> {
    resolver: &'a CategoryResolver,
}

impl<'a> QifParser<'a> {
    #[must_use]
    pub fn new(resolver: &'a CategoryResolver) -> Self {
        Self { resolver }
    }

    // Emit one expense from an accumulated block.
    fn emit(&self, block: &[String]) -> Result<Expense, Error> {
        let amount_field = block
            .get(AMOUNT_FIELD)
            .ok_or_else(|| Error::format_error("QIF", "record has no amount field"))?;
        let payee_field = block
            .get(PAYEE_FIELD)
            .ok_or_else(|| Error::format_error("QIF", "record has no payee field"))?;

        let name = payee_field.strip_prefix('P').unwrap_or(payee_field);
        let amount = amount_field.strip_prefix("T-").unwrap_or(amount_field);
        let debit = normalize_numeric_string(amount)?.abs();

        Ok(Expense::new(name, self.resolver.resolve(name), 0.0, debit))
    }
}

impl StatementParser for QifParser<'_> {
    #[tracing::instrument(name = "Parse QIF statement", skip(self))]
    fn parse(&self, path: &Path) -> Result<Vec<Expense>, Error> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut block: Vec<String> = Vec::new();
        let mut expenses = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();

            if line.starts_with('!') {
                continue;
            }

            block.push(line.to_string());

            // Hit the end of entry
            if line.contains('^') {
                expenses.push(self.emit(&block)?);
                block.clear();
            }
        }

        Ok(expenses)
    }
}

// -- Tests ----------------------------------------------------------------------------
