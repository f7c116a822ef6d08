//! Parser for QFX/OFX/QBO statement downloads
//!
//! OFX 1.x is SGML rather than XML: tags may carry a bare value with no
//! closing tag. Rather than a full markup parser, each `<STMTTRN>` block is
//! sliced out of the text and its tag values read up to the next `<` or end
//! of line. Only `DEBIT` transactions become expenses; the memo is cleaned
//! and resolved against the category table.

use std::fs;
use std::path::Path;

use crate::error::AppErrors as Error;
use crate::model::Expense;
use crate::normalize::{clean_description, normalize_numeric_string};
use crate::parser::StatementParser;
use crate::resolver::CategoryResolver;

const TRANSACTION_TAG: &str = "STMTTRN";
const DEBIT_MARKER: &str = "DEBIT";

#[derive(Debug)]
pub struct QfxParser<'a> {
    resolver: &'a CategoryResolver,
}

impl<'a> QfxParser<'a> {
    #[must_use]
    pub fn new(resolver: &'a CategoryResolver) -> Self {
        Self { resolver }
    }

    /// Parse already-read OFX text.
    ///
    /// # Errors
    /// Will return `FormatError` if a transaction block is missing its
    /// type, memo or amount tag.
    pub fn parse_ofx_text(&self, content: &str) -> Result<Vec<Expense>, Error> {
        let mut expenses = Vec::new();

        for block in extract_blocks(content, TRANSACTION_TAG) {
            let trn_type = tag_value(block, "TRNTYPE")
                .ok_or_else(|| Error::format_error("QFX", "missing <TRNTYPE> in <STMTTRN>"))?;

            if trn_type != DEBIT_MARKER {
                continue;
            }

            let memo = tag_value(block, "MEMO")
                .ok_or_else(|| Error::format_error("QFX", "missing <MEMO> in <STMTTRN>"))?;
            let amount = tag_value(block, "TRNAMT")
                .ok_or_else(|| Error::format_error("QFX", "missing <TRNAMT> in <STMTTRN>"))?;

            let name = clean_description(Some(memo));
            let debit = normalize_numeric_string(amount)?.abs();

            expenses.push(Expense::new(
                name.clone(),
                self.resolver.resolve(&name),
                0.0,
                debit,
            ));
        }

        Ok(expenses)
    }
}

impl StatementParser for QfxParser<'_> {
    #[tracing::instrument(name = "Parse QFX statement", skip(self))]
    fn parse(&self, path: &Path) -> Result<Vec<Expense>, Error> {
        let content = fs::read_to_string(path)?;
        self.parse_ofx_text(&content)
    }
}

// Slice out the contents of every <TAG> block. A block ends at </TAG> when
// present, otherwise at the next <TAG> or end of input.
fn extract_blocks<'c>(content: &'c str, tag: &str) -> Vec<&'c str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let mut blocks = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find(&open) {
        let body = &rest[start + open.len()..];
        let end = body
            .find(&close)
            .or_else(|| body.find(&open))
            .unwrap_or(body.len());
        blocks.push(&body[..end]);
        rest = &body[end..];
    }

    blocks
}

// Value of <TAG> within a block: the text up to the next tag or line end.
fn tag_value<'b>(block: &'b str, tag: &str) -> Option<&'b str> {
    let open = format!("<{tag}>");
    let start = block.find(&open)? + open.len();
    let rest = &block[start..];
    let end = rest
        .find(|c| c == '<' || c == '\n' || c == '\r')
        .unwrap_or(rest.len());
    let value = rest[..end].trim();

    (!value.is_empty()).then_some(value)
}

// -- Tests ----------------------------------------------------------------------------
