//! Reductions over parsed expenses
//!
//! Pure, single-pass reductions producing the summaries the chart layer
//! consumes. Accumulation is strict left-to-right in input order, so totals
//! are deterministic for a given parse.

use std::collections::BTreeMap;

use tracing_log::log::debug;

use crate::error::AppErrors as Error;
use crate::model::Expense;

/// Category label -> accumulated debit total.
pub type CategorySummary = BTreeMap<String, f64>;

/// Category label -> (description -> accumulated debit total).
pub type ExpenseSummary = BTreeMap<String, BTreeMap<String, f64>>;

/// The distinct categories observed, sorted.
#[must_use]
pub fn category_list(expenses: &[Expense]) -> Vec<String> {
    let categories: std::collections::BTreeSet<String> =
        expenses.iter().map(|e| e.category.clone()).collect();
    categories.into_iter().collect()
}

/// Sum debits per category.
///
/// # Errors
/// Will return `AggregationError` if an expense carries a non-finite debit;
/// no partial result is produced.
pub fn category_totals(expenses: &[Expense]) -> Result<CategorySummary, Error> {
    let mut summary = CategorySummary::new();

    for expense in expenses {
        check_debit(expense)?;
        *summary.entry(expense.category.clone()).or_insert(0.0) += expense.debit;
    }

    debug!("Completed category reduction: {} categories", summary.len());
    Ok(summary)
}

/// Sum debits per (category, description) pair.
///
/// # Errors
/// Will return `AggregationError` if an expense carries a non-finite debit;
/// no partial result is produced.
pub fn expense_totals(expenses: &[Expense]) -> Result<ExpenseSummary, Error> {
    let mut summary = ExpenseSummary::new();

    for expense in expenses {
        check_debit(expense)?;
        *summary
            .entry(expense.category.clone())
            .or_default()
            .entry(expense.description.clone())
            .or_insert(0.0) += expense.debit;
    }

    debug!("Completed expense reduction: {} categories", summary.len());
    Ok(summary)
}

// A non-finite debit means a parser let a malformed record through. Treated
// as a defect signal, not a recoverable condition.
fn check_debit(expense: &Expense) -> Result<(), Error> {
    if expense.debit.is_finite() {
        Ok(())
    } else {
        Err(Error::AggregationError(format!(
            "non-finite debit for '{}'",
            expense.description
        )))
    }
}

// -- Tests ----------------------------------------------------------------------------
