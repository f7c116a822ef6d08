//! Text normalisation for raw statement fields
//!
//! Statement descriptions arrive with store numbers, card punctuation and
//! ragged whitespace ("PUBLIX #1234", "SQ *COFFEE"). These helpers reduce
//! them to plain merchant text, and convert numeric columns to floats.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AppErrors as Error;

// ASCII digits and the printable symbol set stripped from descriptions.
static NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r##"[0-9!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]"##).unwrap()
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\s+").unwrap()
});

/// Convert a numeric statement field to a float.
///
/// Blank (or all-whitespace) fields are treated as zero. Currency symbols
/// are not accepted; callers strip them first.
///
/// # Errors
/// Will return `InvalidNumericLiteral` if the trimmed text is not a valid
/// number.
pub fn normalize_numeric_string(num_str: &str) -> Result<f64, Error> {
    let trimmed = num_str.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumericLiteral(num_str.to_string()))
}

/// Remove numbers, symbols and whitespace noise from a description.
///
/// A missing description yields the empty string. Idempotent.
#[must_use]
pub fn clean_description(in_str: Option<&str>) -> String {
    let Some(in_str) = in_str else {
        return String::new();
    };

    let cleaned = NOISE_RE.replace_all(in_str, "");
    let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

// -- Tests ----------------------------------------------------------------------------
