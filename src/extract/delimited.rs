//! Delimited-text extraction (csv and friends).

use super::ExtractStrategy;
use crate::model::RawTable;

/// Candidate separators, tried in this fixed order. The first separator that
/// yields more than one column with a consistent column count across the
/// sampled rows wins.
pub(crate) const SEPARATORS: [char; 4] = [',', ';', '\t', '|'];

/// Rows inspected when checking column-count consistency.
const SAMPLE_ROWS: usize = 10;

/// Extracts tables from separator-delimited text.
pub struct DelimitedStrategy;

impl ExtractStrategy for DelimitedStrategy {
    fn name(&self) -> &'static str {
        "delimited"
    }

    fn extract(&self, text: &str) -> Option<RawTable> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.is_empty() {
            return None;
        }

        SEPARATORS
            .iter()
            .find(|&&sep| separates_consistently(&lines, sep))
            .map(|&sep| parse_lines(&lines, sep))
    }
}

/// Whether `sep` splits the sampled lines into a consistent count of more
/// than one column.
fn separates_consistently(lines: &[&str], sep: char) -> bool {
    let mut sample = lines.iter().take(SAMPLE_ROWS);
    let Some(first) = sample.next() else {
        return false;
    };
    let columns = field_count(first, sep);
    columns > 1 && sample.all(|line| field_count(line, sep) == columns)
}

/// Number of fields `sep` splits a line into.
pub(crate) fn field_count(line: &str, sep: char) -> usize {
    line.split(sep).count()
}

/// Parse pre-filtered non-blank lines with a known separator. The first line
/// is the header; short rows are padded with missing cells, long rows are
/// truncated to the header width.
pub(crate) fn parse_lines(lines: &[&str], sep: char) -> RawTable {
    let headers: Vec<String> = lines[0].split(sep).map(|h| h.trim().to_string()).collect();
    let width = headers.len();

    let rows = lines[1..]
        .iter()
        .map(|line| {
            let mut cells: Vec<Option<String>> = line
                .split(sep)
                .take(width)
                .map(|cell| {
                    let trimmed = cell.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(trimmed.to_string())
                    }
                })
                .collect();
            cells.resize(width, None);
            cells
        })
        .collect();

    RawTable::new(headers, rows)
}
