use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppErrors {
    // -- General error
    #[error("Error: {0}")]
    Error(String),

    #[error("Can't set tracing Global Defafault")]
    SetGlobalDefaultError(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Can't set the logger")]
    SetLoggerError(#[from] tracing_log::log::SetLoggerError),

    // -- Parse error
    #[error("Invalid numeric literal: '{0}' is not a number")]
    InvalidNumericLiteral(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Malformed {format} record: {reason}")]
    FormatError { format: String, reason: String },

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    // -- Aggregation error
    #[error("Aggregation failed: {0}")]
    AggregationError(String),

    // -- File error
    #[error("Failed to open file")]
    FileError(#[from] std::io::Error),

    #[error("Failed to read delimited record")]
    CsvError(#[from] csv::Error),

    #[error("Failed to extract text from PDF")]
    PdfError(#[from] pdf_extract::OutputError),

    #[error("Failed to serialise chart data")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error")]
    ConfigurationError(#[from] config::ConfigError),
}

impl AppErrors {
    /// Construct a `FormatError` for the named statement format.
    pub fn format_error(format: &str, reason: impl Into<String>) -> Self {
        AppErrors::FormatError {
            format: format.to_string(),
            reason: reason.into(),
        }
    }
}
