//! Dimension metrics for BOM documentation quality.
//!
//! Five independent, pure analyzers over a [`NormalizedTable`], one per
//! quality dimension. Each degrades to a zero score with all presence flags
//! false when the relevant canonical column is absent or the table has no
//! rows; there is no failure mode.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::NormalizedTable;
use crate::normalize::CanonicalField;

/// Designator-shaped values: a letter prefix and digits ("R1", "IC3").
static GENERIC_DESIGNATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+\d+$").expect("static regex"));

/// Electrical value with a unit ("10kΩ", "100nF", "3.3V").
static VALUE_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)?\s*(k|K|M|u|n|p|m|µ|μ)?\s*(Ω|ohm|Ohm|F|H|V|A|W)").expect("static regex")
});

/// A URL with both a scheme and a host.
static VALID_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^/\s]+").expect("static regex"));

/// Currency symbols checked in cost cells.
static CURRENCY_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[$€£¥]").expect("static regex"));

/// Classification of a single part-number cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartClass {
    /// A real identifier: 4+ alphanumeric/hyphen characters that do not
    /// merely look like a reference designator.
    Specific,
    /// Designator-shaped ("R1", "C10"): identifies an instance, not a part.
    Generic,
    /// An electrical value with a unit standing in for a part number.
    ValueOnly,
    /// Missing or unrecognizable.
    Empty,
}

/// Part-number shape patterns.
///
/// The default "specific" shape can misclassify unusual manufacturer
/// numbering schemes; swap in domain-specific patterns where needed.
#[derive(Debug, Clone)]
pub struct PartNumberPatterns {
    specific: Regex,
}

impl Default for PartNumberPatterns {
    fn default() -> Self {
        Self {
            specific: Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]{3,}$").expect("static regex"),
        }
    }
}

impl PartNumberPatterns {
    /// Create patterns with a custom "specific part number" shape.
    #[must_use]
    pub const fn with_specific(specific: Regex) -> Self {
        Self { specific }
    }

    /// Classify one part-number cell.
    ///
    /// Designator and value shapes are tested before the specific shape:
    /// "R1" and "100nF" both satisfy the loose specific pattern but do not
    /// identify a part.
    #[must_use]
    pub fn classify(&self, cell: &str) -> PartClass {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            PartClass::Empty
        } else if GENERIC_DESIGNATOR.is_match(trimmed) {
            PartClass::Generic
        } else if VALUE_SPEC.is_match(trimmed) {
            PartClass::ValueOnly
        } else if self.specific.is_match(trimmed) {
            PartClass::Specific
        } else {
            PartClass::Empty
        }
    }
}

/// Specificity band for part-number coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specificity {
    High,
    Medium,
    Low,
    Unknown,
}

impl Specificity {
    /// Band for a specificity score: high above 0.8, medium above 0.5.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score > 0.8 {
            Self::High
        } else if score > 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Part-number quality: how many rows carry a specific part identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartNumberMetrics {
    /// Whether any part-number-tagged column exists.
    pub has_part_numbers: bool,
    /// Total data rows in the table.
    pub total_rows: usize,
    /// Cells classified as specific part numbers.
    pub specific_parts: usize,
    /// Cells that are designator-shaped.
    pub generic_parts: usize,
    /// Cells that are electrical values with units.
    pub value_only_parts: usize,
    /// Rows left without any recognizable part identification.
    pub empty_parts: usize,
    /// Specificity band of the score.
    pub specificity: Specificity,
    /// specific / total_rows, in [0, 1].
    pub score: f32,
}

impl PartNumberMetrics {
    /// Analyze part-number quality with the default shape patterns.
    #[must_use]
    pub fn from_table(table: &NormalizedTable) -> Self {
        Self::with_patterns(table, &PartNumberPatterns::default())
    }

    /// Analyze part-number quality with custom shape patterns.
    #[must_use]
    pub fn with_patterns(table: &NormalizedTable, patterns: &PartNumberPatterns) -> Self {
        let total_rows = table.row_count();
        let has_part_numbers = table.has_field(CanonicalField::PartNumber);
        if !has_part_numbers || total_rows == 0 {
            return Self {
                has_part_numbers,
                total_rows,
                ..Self::empty()
            };
        }

        let mut specific = 0usize;
        let mut generic = 0usize;
        let mut value_only = 0usize;
        for cell in table.cells_in(CanonicalField::PartNumber) {
            match patterns.classify(cell) {
                PartClass::Specific => specific += 1,
                PartClass::Generic => generic += 1,
                PartClass::ValueOnly => value_only += 1,
                PartClass::Empty => {}
            }
        }
        let classified = specific + generic + value_only;
        let empty_parts = total_rows.saturating_sub(classified);
        let score = clamp(specific as f32 / total_rows as f32);

        Self {
            has_part_numbers,
            total_rows,
            specific_parts: specific,
            generic_parts: generic,
            value_only_parts: value_only,
            empty_parts,
            specificity: Specificity::from_score(score),
            score,
        }
    }

    /// Zero metrics for an empty or column-less table.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            has_part_numbers: false,
            total_rows: 0,
            specific_parts: 0,
            generic_parts: 0,
            value_only_parts: 0,
            empty_parts: 0,
            specificity: Specificity::Unknown,
            score: 0.0,
        }
    }
}

/// Manufacturer coverage: rows with a populated manufacturer cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerMetrics {
    /// Whether any manufacturer-tagged column exists.
    pub has_manufacturer_info: bool,
    /// Names of the manufacturer-tagged columns.
    pub manufacturer_columns: Vec<String>,
    /// Populated manufacturer cells, summed over all matching columns.
    pub rows_with_manufacturer: usize,
    /// Coverage, clamped to [0, 1].
    pub score: f32,
}

impl ManufacturerMetrics {
    /// Analyze manufacturer coverage.
    #[must_use]
    pub fn from_table(table: &NormalizedTable) -> Self {
        let columns: Vec<String> = table
            .columns_with(CanonicalField::Manufacturer)
            .map(String::from)
            .collect();
        let total_rows = table.row_count();
        if columns.is_empty() || total_rows == 0 {
            return Self {
                has_manufacturer_info: !columns.is_empty(),
                manufacturer_columns: columns,
                rows_with_manufacturer: 0,
                score: 0.0,
            };
        }

        let populated = table.populated_count(CanonicalField::Manufacturer);
        Self {
            has_manufacturer_info: true,
            manufacturer_columns: columns,
            rows_with_manufacturer: populated,
            score: clamp(populated as f32 / total_rows as f32),
        }
    }

    /// Zero metrics.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            has_manufacturer_info: false,
            manufacturer_columns: Vec::new(),
            rows_with_manufacturer: 0,
            score: 0.0,
        }
    }
}

/// Datasheet link coverage and validity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasheetMetrics {
    /// Whether any datasheet-tagged column exists.
    pub has_datasheet_links: bool,
    /// Cells containing a URL-like value.
    pub total_links: usize,
    /// Links with both a scheme and a host.
    pub valid_links: usize,
    /// URL-like values lacking a scheme or host.
    pub broken_links: usize,
    /// valid / total links, 0 when there are no links.
    pub score: f32,
}

impl DatasheetMetrics {
    /// Analyze datasheet links.
    #[must_use]
    pub fn from_table(table: &NormalizedTable) -> Self {
        let has_column = table.has_field(CanonicalField::Datasheet);
        if !has_column || table.row_count() == 0 {
            return Self {
                has_datasheet_links: has_column,
                ..Self::empty()
            };
        }

        let mut total = 0usize;
        let mut valid = 0usize;
        for cell in table.cells_in(CanonicalField::Datasheet) {
            if cell.contains("http") || cell.contains("www") {
                total += 1;
                if is_valid_url(cell) {
                    valid += 1;
                }
            }
        }
        let score = if total > 0 {
            clamp(valid as f32 / total as f32)
        } else {
            0.0
        };

        Self {
            has_datasheet_links: true,
            total_links: total,
            valid_links: valid,
            broken_links: total - valid,
            score,
        }
    }

    /// Zero metrics.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            has_datasheet_links: false,
            total_links: 0,
            valid_links: 0,
            broken_links: 0,
            score: 0.0,
        }
    }
}

/// Alternative-part coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativesMetrics {
    /// Whether any alternatives-tagged column exists.
    pub has_alternatives: bool,
    /// Populated alternative cells, summed over all matching columns.
    pub rows_with_alternatives: usize,
    /// Coverage, clamped to [0, 1].
    pub score: f32,
}

impl AlternativesMetrics {
    /// Analyze alternative-part coverage.
    #[must_use]
    pub fn from_table(table: &NormalizedTable) -> Self {
        let has_column = table.has_field(CanonicalField::Alternatives);
        let total_rows = table.row_count();
        if !has_column || total_rows == 0 {
            return Self {
                has_alternatives: has_column,
                rows_with_alternatives: 0,
                score: 0.0,
            };
        }

        let populated = table.populated_count(CanonicalField::Alternatives);
        Self {
            has_alternatives: true,
            rows_with_alternatives: populated,
            score: clamp(populated as f32 / total_rows as f32),
        }
    }

    /// Zero metrics.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            has_alternatives: false,
            rows_with_alternatives: 0,
            score: 0.0,
        }
    }
}

/// Cost information coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostMetrics {
    /// Whether any cost-tagged column exists.
    pub has_cost_info: bool,
    /// Populated cost cells, summed over all matching columns.
    pub rows_with_cost: usize,
    /// Whether any cost cell carries a currency symbol. Informational only;
    /// does not affect the score.
    pub has_currency: bool,
    /// Coverage, clamped to [0, 1].
    pub score: f32,
}

impl CostMetrics {
    /// Analyze cost coverage.
    #[must_use]
    pub fn from_table(table: &NormalizedTable) -> Self {
        let has_column = table.has_field(CanonicalField::Cost);
        let total_rows = table.row_count();
        if !has_column || total_rows == 0 {
            return Self {
                has_cost_info: has_column,
                rows_with_cost: 0,
                has_currency: false,
                score: 0.0,
            };
        }

        let cells = table.cells_in(CanonicalField::Cost);
        let has_currency = cells.iter().any(|c| CURRENCY_SYMBOL.is_match(c));
        let populated = cells.len();

        Self {
            has_cost_info: true,
            rows_with_cost: populated,
            has_currency,
            score: clamp(populated as f32 / total_rows as f32),
        }
    }

    /// Zero metrics.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            has_cost_info: false,
            rows_with_cost: 0,
            has_currency: false,
            score: 0.0,
        }
    }
}

/// Whether a URL-like string has both a scheme and a host.
fn is_valid_url(url: &str) -> bool {
    VALID_URL.is_match(url.trim())
}

/// Clamp a score into [0, 1].
#[must_use]
pub fn clamp(score: f32) -> f32 {
    score.clamp(0.0, 1.0)
}
