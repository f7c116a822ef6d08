//! Statement file parsers
//!
//! One parser per supported format, each producing the same flat list of
//! [`Expense`] records. Formats that carry no category data hold the
//! resolver by reference; the delimited format reads its categories inline.

pub mod csv;
pub mod pdf;
pub mod qfx;
pub mod qif;

use std::ffi::OsStr;
use std::path::Path;

pub use csv::CsvParser;
pub use pdf::PdfParser;
pub use qfx::QfxParser;
pub use qif::QifParser;

use crate::configuration::Settings;
use crate::error::AppErrors as Error;
use crate::model::Expense;
use crate::resolver::CategoryResolver;

/// Common parsing capability: turn a statement file into expenses.
pub trait StatementParser {
    /// Parse a statement file into a list of expenses.
    ///
    /// # Errors
    /// Will return an error if the file can't be read, a numeric field
    /// can't be parsed, or the record layout is malformed. A parse failure
    /// aborts the whole file.
    fn parse(&self, path: &Path) -> Result<Vec<Expense>, Error>;
}

/// Select a parser from the file extension.
///
/// # Errors
/// Will return `UnsupportedExtension` for anything other than csv, qif,
/// qfx/ofx/qbo or pdf.
pub fn parser_for<'a>(
    path: &Path,
    settings: &'a Settings,
    resolver: &'a CategoryResolver,
) -> Result<Box<dyn StatementParser + 'a>, Error> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(Box::new(CsvParser)),
        "qif" => Ok(Box::new(QifParser::new(resolver))),
        "qfx" | "ofx" | "qbo" => Ok(Box::new(QfxParser::new(resolver))),
        "pdf" => Ok(Box::new(PdfParser::new(resolver, &settings.cities)?)),
        _ => Err(Error::UnsupportedExtension(extension)),
    }
}

/// Parse a statement file, dispatching on its extension.
///
/// # Errors
/// Will return `FileNotFound` before any parsing occurs if the path does
/// not exist, otherwise whatever the selected parser returns.
pub fn parse_statement(
    path: &Path,
    settings: &Settings,
    resolver: &CategoryResolver,
) -> Result<Vec<Expense>, Error> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let parser = parser_for(path, settings, resolver)?;
    parser.parse(path)
}

// -- Tests ----------------------------------------------------------------------------
