//! Data model for parsed statement records

pub mod expense;

pub use expense::Expense;

/// Category label assigned when no confident match exists. A valid, silent
/// outcome rather than an error.
pub const UNKNOWN_CATEGORY: &str = "Unknown";
