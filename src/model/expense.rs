//! Model for one parsed statement transaction

use serde::{Deserialize, Serialize};

/// One transaction extracted from a statement file.
///
/// Constructed exactly once by a parser and immutable afterwards. Has no
/// identity beyond structural equality and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Normalised merchant/memo text. May be empty.
    pub description: String,
    /// Assigned category label. `"Unknown"` means no confident match.
    pub category: String,
    /// Amount recorded as a credit. Unused by the reductions but part of
    /// the record.
    pub credit: f64,
    /// Amount recorded as a debit. The aggregation quantity.
    pub debit: f64,
}

impl Expense {
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        credit: f64,
        debit: f64,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            credit,
            debit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality() {
        let a = Expense::new("PUBLIX", "Groceries", 0.0, 4.50);
        let b = Expense::new("PUBLIX", "Groceries", 0.0, 4.50);

        assert_eq!(a, b);
    }
}
