//! Spreadsheet workbook extraction (xlsx/xls/ods) via calamine.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::model::RawTable;

/// Extract a table from workbook bytes.
///
/// Only the first sheet is read: the header is the first non-empty row and
/// everything after it is data, with blank cells becoming missing values.
/// Any workbook that cannot be opened yields `None`.
pub(crate) fn extract_workbook(bytes: &[u8]) -> Option<RawTable> {
    let mut workbook = match open_workbook_auto_from_rs(Cursor::new(bytes)) {
        Ok(workbook) => workbook,
        Err(err) => {
            tracing::debug!(%err, "unreadable workbook");
            return None;
        }
    };

    let range = workbook.worksheet_range_at(0)?.ok()?;
    let mut rows = range.rows();

    let header_row = rows.find(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_to_string(cell).unwrap_or_default())
        .collect();

    let data = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Some(RawTable::new(headers, data))
}

/// Render a cell as trimmed text; empty and error cells are missing.
fn cell_to_string(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_yield_none() {
        assert!(extract_workbook(&[0x00, 0x01, 0x02, 0x03]).is_none());
        assert!(extract_workbook(b"not a workbook at all").is_none());
    }

    #[test]
    fn test_cell_rendering() {
        assert_eq!(cell_to_string(&Data::Empty), None);
        assert_eq!(cell_to_string(&Data::String("  10k ".into())), Some("10k".into()));
        assert_eq!(cell_to_string(&Data::Int(3)), Some("3".into()));
        assert_eq!(cell_to_string(&Data::Float(2.0)), Some("2".into()));
        assert_eq!(cell_to_string(&Data::Float(0.25)), Some("0.25".into()));
        assert_eq!(cell_to_string(&Data::String("   ".into())), None);
    }
}
