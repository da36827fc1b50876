//! Embedded-table extraction from free text.
//!
//! Documentation files often carry a BOM inline: an indicator phrase
//! ("bill of materials", "parts list", ...) followed by some table-shaped
//! region. After locating the indicator, the text below it is scanned line
//! by line; at each position the region shapes are tried in declared order
//! (delimited lines, Markdown table, whitespace-aligned columns) and the
//! first match is extracted. Only the first matching region is taken.

use super::{delimited, markdown, ExtractStrategy};
use crate::model::RawTable;

/// Separators considered for embedded delimited regions. Pipe is excluded
/// here: pipe blocks are claimed by the Markdown shape, separator row and
/// all.
const REGION_SEPARATORS: [char; 3] = [',', ';', '\t'];

/// Minimum fields per line for an embedded delimited region.
const MIN_REGION_FIELDS: usize = 3;

/// Minimum tokens per line and lines per region for aligned-column regions.
const MIN_ALIGNED_TOKENS: usize = 3;
const MIN_ALIGNED_LINES: usize = 3;

/// Extracts the first table embedded in prose after a BOM indicator phrase.
pub struct FreeTextStrategy;

impl ExtractStrategy for FreeTextStrategy {
    fn name(&self) -> &'static str {
        "free-text"
    }

    fn extract(&self, text: &str) -> Option<RawTable> {
        let offset = crate::detect::indicator_offset(text)?;
        let lines: Vec<&str> = text[offset..].lines().collect();

        (0..lines.len()).find_map(|i| {
            delimited_region(&lines[i..])
                .or_else(|| markdown::table_at(&lines, i))
                .or_else(|| aligned_region(&lines[i..]))
        })
    }
}

/// A contiguous run of lines sharing one separator and a field count of at
/// least [`MIN_REGION_FIELDS`], starting at `lines[0]`. Requires a header
/// line plus at least one data line.
fn delimited_region(lines: &[&str]) -> Option<RawTable> {
    let first = lines.first()?;
    let sep = REGION_SEPARATORS
        .into_iter()
        .find(|&sep| delimited::field_count(first, sep) >= MIN_REGION_FIELDS)?;
    let fields = delimited::field_count(first, sep);

    let run: Vec<&str> = lines
        .iter()
        .take_while(|line| delimited::field_count(line, sep) == fields)
        .copied()
        .collect();
    if run.len() < 2 {
        return None;
    }
    Some(delimited::parse_lines(&run, sep))
}

/// A run of at least [`MIN_ALIGNED_LINES`] lines, each holding at least
/// [`MIN_ALIGNED_TOKENS`] whitespace-separated tokens. The first line is
/// taken as the header.
fn aligned_region(lines: &[&str]) -> Option<RawTable> {
    let run: Vec<Vec<&str>> = lines
        .iter()
        .map(|line| line.split_whitespace().collect::<Vec<&str>>())
        .take_while(|tokens| tokens.len() >= MIN_ALIGNED_TOKENS)
        .collect();
    if run.len() < MIN_ALIGNED_LINES {
        return None;
    }

    let headers: Vec<String> = run[0].iter().map(|t| (*t).to_string()).collect();
    let width = headers.len();
    let rows = run[1..]
        .iter()
        .map(|tokens| {
            let mut row: Vec<Option<String>> = tokens
                .iter()
                .take(width)
                .map(|t| Some((*t).to_string()))
                .collect();
            row.resize(width, None);
            row
        })
        .collect();
    Some(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_csv_region() {
        let text = "\
# Assembly guide

Parts list:

Reference,Value,Quantity
R1,10k,1
C1,100nF,2

Solder carefully.
";
        let raw = FreeTextStrategy.extract(text).expect("table");
        assert_eq!(raw.headers, vec!["Reference", "Value", "Quantity"]);
        assert_eq!(raw.rows.len(), 2);
    }

    #[test]
    fn test_embedded_markdown_region() {
        let text = "\
The bill of materials is below.

| Reference | Value | Footprint |
|-----------|-------|-----------|
| R1        | 10k   | 0805      |
";
        let raw = FreeTextStrategy.extract(text).expect("table");
        assert_eq!(raw.headers, vec!["Reference", "Value", "Footprint"]);
        assert_eq!(raw.rows.len(), 1);
    }

    #[test]
    fn test_aligned_columns_region() {
        let text = "\
Component list

Ref   Value   Package
R1    10k     0805
C1    100nF   0603
";
        let raw = FreeTextStrategy.extract(text).expect("table");
        assert_eq!(raw.headers, vec!["Ref", "Value", "Package"]);
        assert_eq!(raw.rows.len(), 2);
    }

    #[test]
    fn test_no_indicator_no_table() {
        let text = "Reference,Value,Quantity\nR1,10k,1\n";
        assert!(FreeTextStrategy.extract(text).is_none());
    }

    #[test]
    fn test_indicator_without_table() {
        let text = "See the bill of materials in the wiki.\nNothing else here.\n";
        assert!(FreeTextStrategy.extract(text).is_none());
    }

    #[test]
    fn test_only_first_region_extracted() {
        let text = "\
Parts list

A,B,C
1,2,3

X,Y,Z
4,5,6
";
        let raw = FreeTextStrategy.extract(text).expect("table");
        assert_eq!(raw.headers, vec!["A", "B", "C"]);
        assert_eq!(raw.rows.len(), 1);
    }

    #[test]
    fn test_two_field_lines_not_a_region() {
        let text = "Parts list\n\na,b\n1,2\n";
        assert!(FreeTextStrategy.extract(text).is_none());
    }
}
