//! Markdown pipe-table extraction.

use std::sync::LazyLock;

use regex::Regex;

use super::ExtractStrategy;
use crate::model::RawTable;

/// A separator-row cell: dashes with optional alignment colons.
static SEPARATOR_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-+:?$").expect("static regex"));

/// Extracts the first well-formed pipe table from a Markdown document.
///
/// A block qualifies only with a header row of at least two cells followed
/// by a valid separator row; pipe blocks without a separator row are
/// rejected rather than misparsed.
pub struct MarkdownStrategy;

impl ExtractStrategy for MarkdownStrategy {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extract(&self, text: &str) -> Option<RawTable> {
        let lines: Vec<&str> = text.lines().collect();
        (0..lines.len()).find_map(|i| table_at(&lines, i))
    }
}

/// Try to read a table whose header row is at `lines[start]`.
pub(crate) fn table_at(lines: &[&str], start: usize) -> Option<RawTable> {
    let headers = pipe_cells(lines[start])?;
    if headers.len() < 2 {
        return None;
    }
    let separator = pipe_cells(lines.get(start + 1)?)?;
    if separator.len() < 2 || !separator.iter().all(|c| SEPARATOR_CELL.is_match(c)) {
        return None;
    }

    let width = headers.len();
    let mut rows = Vec::new();
    for line in &lines[start + 2..] {
        let Some(cells) = pipe_cells(line) else {
            break;
        };
        let mut row: Vec<Option<String>> = cells
            .into_iter()
            .take(width)
            .map(|c| if c.is_empty() { None } else { Some(c) })
            .collect();
        row.resize(width, None);
        rows.push(row);
    }

    Some(RawTable::new(headers, rows))
}

/// Split a pipe-table line into trimmed cells, dropping the outer pipes.
/// Returns `None` for lines that are not part of a pipe table.
fn pipe_cells(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if !trimmed.contains('|') {
        return None;
    }
    let mut parts: Vec<&str> = trimmed.split('|').collect();
    if parts.first() == Some(&"") {
        parts.remove(0);
    }
    if parts.last().map(|p| p.trim().is_empty()) == Some(true) {
        parts.pop();
    }
    Some(parts.iter().map(|p| p.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
# Components

| Reference | Value | Footprint |
|-----------|-------|-----------|
| R1        | 10k   | 0805      |
| C1        | 100nF | 0603      |

Some trailing prose.
";

    #[test]
    fn test_basic_table() {
        let raw = MarkdownStrategy.extract(TABLE).expect("table");
        assert_eq!(raw.headers, vec!["Reference", "Value", "Footprint"]);
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[1][1].as_deref(), Some("100nF"));
    }

    #[test]
    fn test_alignment_colons_accepted() {
        let text = "| a | b |\n|:--|--:|\n| 1 | 2 |\n";
        let raw = MarkdownStrategy.extract(text).expect("table");
        assert_eq!(raw.rows.len(), 1);
    }

    #[test]
    fn test_missing_separator_rejected() {
        let text = "| a | b |\n| 1 | 2 |\n| 3 | 4 |\n";
        assert!(MarkdownStrategy.extract(text).is_none());
    }

    #[test]
    fn test_single_header_cell_rejected() {
        let text = "| only |\n|------|\n| x |\n";
        assert!(MarkdownStrategy.extract(text).is_none());
    }

    #[test]
    fn test_first_table_wins() {
        let text = "\
| A | B |
|---|---|
| 1 | 2 |

| C | D |
|---|---|
| 3 | 4 |
";
        let raw = MarkdownStrategy.extract(text).expect("table");
        assert_eq!(raw.headers, vec!["A", "B"]);
        assert_eq!(raw.rows.len(), 1);
    }

    #[test]
    fn test_empty_interior_cells_missing() {
        let text = "| Ref | MPN |\n|---|---|\n| R1 | |\n";
        let raw = MarkdownStrategy.extract(text).expect("table");
        assert_eq!(raw.rows[0][1], None);
    }

    #[test]
    fn test_no_pipes_no_table() {
        assert!(MarkdownStrategy.extract("plain text\nwith lines\n").is_none());
    }
}
