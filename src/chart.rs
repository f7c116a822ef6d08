//! Chart-ready views of the expense summaries
//!
//! The core does not render. These structures are serialised for an
//! external sunburst/pie renderer, which requires every non-root entry's
//! parent label to appear earlier in the arrays.

use serde::Serialize;

use crate::calculator::{CategorySummary, ExpenseSummary};

/// Root node label of the sunburst hierarchy.
pub const ROOT_LABEL: &str = "Total Cost";

/// Flattened (label, parent, value) tree for sunburst rendering.
///
/// Index 0 is the root with an empty parent and the grand total; then one
/// entry per category (parented on the root); then one entry per
/// (category, description) pair (parented on its category).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstData {
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
}

/// Flat per-category data for pie rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieData {
    pub title: String,
    pub names: Vec<String>,
    pub values: Vec<f64>,
}

/// Flatten the two summary levels plus a grand total into parallel arrays.
#[must_use]
pub fn sunburst_data(categories: &CategorySummary, expenses: &ExpenseSummary) -> SunburstData {
    let total_cost: f64 = categories.values().sum();

    let mut labels = vec![ROOT_LABEL.to_string()];
    let mut parents = vec![String::new()];
    let mut values = vec![total_cost];

    for (category, cost) in categories {
        labels.push(category.clone());
        parents.push(ROOT_LABEL.to_string());
        values.push(*cost);
    }

    // Category entries are all emitted above, so every description's parent
    // already exists.
    for (category, inner) in expenses {
        for (description, cost) in inner {
            labels.push(description.clone());
            parents.push(category.clone());
            values.push(*cost);
        }
    }

    SunburstData {
        labels,
        parents,
        values,
    }
}

/// Flat category names and costs, titled with the grand total.
#[must_use]
pub fn pie_data(categories: &CategorySummary) -> PieData {
    let total: f64 = categories.values().sum();

    PieData {
        title: format!("Statement Overview: {total}"),
        names: categories.keys().cloned().collect(),
        values: categories.values().copied().collect(),
    }
}

// -- Tests ----------------------------------------------------------------------------
