//! Table extraction from detected BOM candidates.
//!
//! Each source format family has a named strategy that converts raw content
//! into a [`RawTable`]; [`extract`] routes a candidate to its strategy and
//! normalizes the result. Strategies return `None` when no parseable
//! rectangular table is present — an expected outcome, never an error.
//!
//! Where several strategies could apply (the free-text extractor), they are
//! tried in a fixed declared order and the first success wins; that order is
//! part of the contract and covered by tests.

mod delimited;
mod freetext;
mod markdown;
mod spreadsheet;

pub use delimited::DelimitedStrategy;
pub use freetext::FreeTextStrategy;
pub use markdown::MarkdownStrategy;

use crate::model::{FormatHint, NormalizedTable, RawTable, SourceContent};

/// A named extraction strategy over text content.
///
/// Strategies are stateless; the explicit name shows up in debug logs when
/// deciding which strategy produced a table.
pub trait ExtractStrategy {
    /// Strategy name, used in logs.
    fn name(&self) -> &'static str;

    /// Try to extract a raw table, `None` if this content has no table.
    fn extract(&self, text: &str) -> Option<RawTable>;
}

/// Extract a candidate's content into a normalized table.
///
/// Returns `None` when the content kind does not match the hint (e.g. binary
/// bytes routed to a text strategy) or when no table is found.
#[must_use]
pub fn extract(content: &SourceContent, hint: FormatHint) -> Option<NormalizedTable> {
    let raw = match hint {
        FormatHint::Spreadsheet => spreadsheet::extract_workbook(content.as_bytes()?),
        FormatHint::Delimited => run_strategy(&DelimitedStrategy, content.as_text()?),
        FormatHint::Markdown => run_strategy(&MarkdownStrategy, content.as_text()?),
        FormatHint::FreeText => run_strategy(&FreeTextStrategy, content.as_text()?),
    }?;
    NormalizedTable::from_raw(raw)
}

fn run_strategy(strategy: &dyn ExtractStrategy, text: &str) -> Option<RawTable> {
    let result = strategy.extract(text);
    match &result {
        Some(raw) => tracing::debug!(
            strategy = strategy.name(),
            columns = raw.headers.len(),
            rows = raw.rows.len(),
            "extracted table"
        ),
        None => tracing::debug!(strategy = strategy.name(), "no table found"),
    }
    result
}
