//! Parser for PDF card statements
//!
//! Page text is extracted with `pdf_extract` and the transaction pattern —
//! two MM/DD date tokens, free text, then a dollar amount — is applied to
//! each page from page four onward; the leading pages are cover and summary
//! material. Text segmentation is separated from extraction so it can be
//! tested without a PDF fixture.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AppErrors as Error;
use crate::model::Expense;
use crate::normalize::{clean_description, normalize_numeric_string};
use crate::parser::StatementParser;
use crate::resolver::CategoryResolver;

/// Cover/summary pages skipped before transaction pages start.
const LEADING_PAGES: usize = 3;

// Transaction date, posting date, description, amount.
static TRANSACTION_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\d{2}/\d{2}\s+\d{2}/\d{2}\s+[^$\n]+\$\s*[\d,]+\.\d{2}").unwrap()
});

static DATE_TOKENS_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^\s*\d{2}/\d{2}\s+\d{2}/\d{2}\s*").unwrap()
});

#[derive(Debug)]
pub struct PdfParser<'a> {
    resolver: &'a CategoryResolver,
    city_re: Option<Regex>,
}

impl<'a> PdfParser<'a> {
    /// Build a parser whose descriptions are stripped of the configured
    /// city names (each expected to be followed by a two-letter state
    /// code).
    ///
    /// # Errors
    /// Will return an error if the city list can't be compiled into a
    /// pattern.
    pub fn new(resolver: &'a CategoryResolver, cities: &[String]) -> Result<Self, Error> {
        let city_re = if cities.is_empty() {
            None
        } else {
            let alternatives = cities
                .iter()
                .map(|city| regex::escape(city))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)\b(?:{alternatives})\s+[A-Za-z]{{2}}\b");
            Some(Regex::new(&pattern).map_err(|e| Error::Error(e.to_string()))?)
        };

        Ok(Self { resolver, city_re })
    }

    /// Segment transaction records out of extracted page text.
    ///
    /// # Errors
    /// Will return an error if a segmented record's amount can't be parsed.
    pub fn parse_pages(&self, pages: &[String]) -> Result<Vec<Expense>, Error> {
        let mut expenses = Vec::new();

        for page in pages.iter().skip(LEADING_PAGES) {
            for record in TRANSACTION_RE.find_iter(page) {
                expenses.push(self.emit(record.as_str())?);
            }
        }

        Ok(expenses)
    }

    // Emit one expense from a matched record.
    fn emit(&self, record: &str) -> Result<Expense, Error> {
        let remainder = DATE_TOKENS_RE.replace(record, "");
        let (description, amount) = remainder
            .split_once('$')
            .ok_or_else(|| Error::format_error("PDF", "record has no amount marker"))?;

        let description = self.strip_cities(&clean_description(Some(description)));
        let debit = normalize_numeric_string(&amount.replace(',', ""))?.abs();

        Ok(Expense::new(
            description.clone(),
            self.resolver.resolve(&description),
            0.0,
            debit,
        ))
    }

    fn strip_cities(&self, description: &str) -> String {
        match &self.city_re {
            Some(re) => clean_description(Some(&re.replace_all(description, ""))),
            None => description.to_string(),
        }
    }
}

impl StatementParser for PdfParser<'_> {
    #[tracing::instrument(name = "Parse PDF statement", skip(self))]
    fn parse(&self, path: &Path) -> Result<Vec<Expense>, Error> {
        let pages = pdf_extract::extract_text_by_pages(path)?;
        self.parse_pages(&pages)
    }
}

// -- Tests ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test::sample_settings;

    fn resolver() -> CategoryResolver {
        CategoryResolver::from_settings(&sample_settings())
    }

    fn pages(transaction_page: &str) -> Vec<String> {
        vec![
            "Account Summary".to_string(),
            "Rewards".to_string(),
            "Interest Charges".to_string(),
            transaction_page.to_string(),
        ]
    }

    #[test]
    fn records_are_segmented_from_running_text() {
        // Arrange
        let resolver = resolver();
        let settings = sample_settings();
        let parser = PdfParser::new(&resolver, &settings.cities).unwrap();
        let pages = pages(
            "Transactions 10/05 10/06 PUBLIX #1234 GAINESVILLE FL $45.67 \
             10/07 10/08 SHELL OIL 5551212 ORLANDO FL $1,030.00 continued",
        );

        // Act
        let expenses = parser.parse_pages(&pages).unwrap();

        // Assert
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0], Expense::new("PUBLIX", "Groceries", 0.0, 45.67));
        assert_eq!(expenses[1], Expense::new("SHELL OIL", "Gas", 0.0, 1030.00));
    }

    #[test]
    fn leading_pages_are_ignored() {
        let resolver = resolver();
        let settings = sample_settings();
        let parser = PdfParser::new(&resolver, &settings.cities).unwrap();

        // A transaction-shaped line on a summary page must not be picked up
        let mut all = pages("10/05 10/06 PUBLIX #1234 GAINESVILLE FL $45.67");
        all[0] = "10/01 10/02 PREVIOUS BALANCE SUMMARY $99.99".to_string();

        let expenses = parser.parse_pages(&all).unwrap();

        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].debit, 45.67);
    }

    #[test]
    fn city_stripping_is_case_insensitive() {
        let resolver = resolver();
        let settings = sample_settings();
        let parser = PdfParser::new(&resolver, &settings.cities).unwrap();
        let pages = pages("10/05 10/06 PUBLIX #12 Gainesville FL $9.99");

        let expenses = parser.parse_pages(&pages).unwrap();

        assert_eq!(expenses[0].description, "PUBLIX");
    }

    #[test]
    fn empty_city_list_leaves_descriptions_alone() {
        let resolver = resolver();
        let parser = PdfParser::new(&resolver, &[]).unwrap();
        let pages = pages("10/05 10/06 PUBLIX GAINESVILLE FL $9.99");

        let expenses = parser.parse_pages(&pages).unwrap();

        assert_eq!(expenses[0].description, "PUBLIX GAINESVILLE FL");
    }

    #[test]
    fn page_with_no_records_yields_nothing() {
        let resolver = resolver();
        let parser = PdfParser::new(&resolver, &[]).unwrap();

        let expenses = parser.parse_pages(&pages("no transactions here")).unwrap();

        assert!(expenses.is_empty());
    }
}
