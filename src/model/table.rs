//! Rectangular table representation shared by all extractors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_header, CanonicalField};

/// An untagged rectangular table straight out of an extractor.
///
/// Headers may still contain duplicates or blanks; cells may be missing.
/// [`NormalizedTable::from_raw`] cleans this up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Create a raw table from headers and rows.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }
}

/// A table column: its (unique) header name and optional canonical tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header name, unique within the table.
    pub name: String,
    /// Canonical semantic field, assigned by first-match priority.
    pub field: Option<CanonicalField>,
}

/// A normalized BOM table.
///
/// Invariants: header names are unique and ordered; each header carries at
/// most one canonical tag; rows map header names to cell values, with absent
/// keys meaning missing cells. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    columns: Vec<Column>,
    rows: Vec<IndexMap<String, String>>,
}

impl NormalizedTable {
    /// Normalize a raw extractor table.
    ///
    /// Blank headers get positional names, duplicate headers get a numeric
    /// suffix, and each unique header is tagged with its canonical field, if
    /// any. Returns `None` for a table without any columns.
    #[must_use]
    pub fn from_raw(raw: RawTable) -> Option<Self> {
        if raw.headers.is_empty() {
            return None;
        }

        let mut seen: IndexMap<String, usize> = IndexMap::new();
        let mut columns = Vec::with_capacity(raw.headers.len());
        for (idx, header) in raw.headers.iter().enumerate() {
            let trimmed = header.trim();
            let base = if trimmed.is_empty() {
                format!("column_{}", idx + 1)
            } else {
                trimmed.to_string()
            };
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;
            let name = if *count == 1 {
                base
            } else {
                format!("{base} ({count})")
            };
            let field = normalize_header(&name);
            columns.push(Column { name, field });
        }

        let rows = raw
            .rows
            .into_iter()
            .map(|cells| {
                columns
                    .iter()
                    .zip(cells)
                    .filter_map(|(col, cell)| {
                        let value = cell?;
                        let trimmed = value.trim();
                        if trimmed.is_empty() {
                            None
                        } else {
                            Some((col.name.clone(), trimmed.to_string()))
                        }
                    })
                    .collect()
            })
            .collect();

        Some(Self { columns, rows })
    }

    /// Columns in table order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Raw header names in table order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Data rows, each a header-to-cell mapping (missing keys = missing cells).
    #[must_use]
    pub fn rows(&self) -> &[IndexMap<String, String>] {
        &self.rows
    }

    /// Whether any column carries the given canonical tag.
    #[must_use]
    pub fn has_field(&self, field: CanonicalField) -> bool {
        self.columns.iter().any(|c| c.field == Some(field))
    }

    /// Names of all columns tagged with the given canonical field.
    pub fn columns_with(&self, field: CanonicalField) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(move |c| c.field == Some(field))
            .map(|c| c.name.as_str())
    }

    /// All non-missing cells in columns tagged with the given field,
    /// in row-major order.
    #[must_use]
    pub fn cells_in(&self, field: CanonicalField) -> Vec<&str> {
        let columns: Vec<&str> = self.columns_with(field).collect();
        let mut cells = Vec::new();
        for row in &self.rows {
            for col in &columns {
                if let Some(value) = row.get(*col) {
                    cells.push(value.as_str());
                }
            }
        }
        cells
    }

    /// Count of non-missing cells in columns tagged with the given field,
    /// summed over all matching columns.
    #[must_use]
    pub fn populated_count(&self, field: CanonicalField) -> usize {
        self.cells_in(field).len()
    }

    /// The canonical fields recognized in this table, in column order.
    #[must_use]
    pub fn recognized_fields(&self) -> Vec<CanonicalField> {
        let mut fields = Vec::new();
        for col in &self.columns {
            if let Some(field) = col.field {
                if !fields.contains(&field) {
                    fields.push(field);
                }
            }
        }
        fields
    }
}
