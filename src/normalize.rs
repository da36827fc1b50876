//! Canonical field vocabulary and header normalization.
//!
//! BOM files in the wild name their columns inconsistently ("Ref", "RefDes",
//! "Designator", ...). This module maps raw headers onto a fixed vocabulary
//! of canonical semantic fields by case-insensitive containment against
//! ordered synonym lists. A header matching several groups is assigned to the
//! first matching group in declaration order.
//!
//! The canonical field names are the one stable, versioned contract of this
//! crate: downstream consumers keying on them must treat the list as a
//! compatibility surface.

use serde::{Deserialize, Serialize};

/// A canonical semantic column tag recognized by the normalizer.
///
/// Declaration order is match priority: a header that matches multiple
/// synonym groups is tagged with the first matching variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    /// Per-instance component identifier (R1, C3, U2).
    Reference,
    /// Component value or description (10k, 100nF, "op-amp").
    Value,
    /// Physical package / mounting descriptor (0805, SOT-23).
    Footprint,
    /// Number of instances of a line item.
    Quantity,
    /// Manufacturer, vendor or supplier name.
    Manufacturer,
    /// Manufacturer or supplier part number.
    PartNumber,
    /// Datasheet or documentation link.
    Datasheet,
    /// Unit or line cost.
    Cost,
    /// Alternative / substitute part suggestions.
    Alternatives,
}

impl CanonicalField {
    /// All canonical fields in match-priority order.
    pub const ALL: [Self; 9] = [
        Self::Reference,
        Self::Value,
        Self::Footprint,
        Self::Quantity,
        Self::Manufacturer,
        Self::PartNumber,
        Self::Datasheet,
        Self::Cost,
        Self::Alternatives,
    ];

    /// Stable snake_case name of this field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Value => "value",
            Self::Footprint => "footprint",
            Self::Quantity => "quantity",
            Self::Manufacturer => "manufacturer",
            Self::PartNumber => "part_number",
            Self::Datasheet => "datasheet",
            Self::Cost => "cost",
            Self::Alternatives => "alternatives",
        }
    }

    /// Ordered synonym list tested by containment against lowercased headers.
    #[must_use]
    pub const fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Self::Reference => &[
                "reference",
                "designator",
                "refdes",
                "ref",
                "reference designator",
            ],
            Self::Value => &["value", "component", "part", "description", "comment"],
            Self::Footprint => &["footprint", "package", "pcb footprint", "smd", "housing"],
            Self::Quantity => &["quantity", "qty", "count", "amount"],
            Self::Manufacturer => &[
                "manufacturer",
                "mfg",
                "vendor",
                "supplier",
                "producer",
                "brand",
            ],
            Self::PartNumber => &[
                "part number",
                "part#",
                "pn",
                "mpn",
                "manufacturer part",
                "supplier part",
            ],
            Self::Datasheet => &["datasheet", "documentation", "spec", "link"],
            Self::Cost => &["cost", "price", "unit cost"],
            Self::Alternatives => &["alternative", "substitute", "replacement"],
        }
    }

    /// Whether a lowercased header matches this field's synonym group.
    #[must_use]
    pub fn matches(&self, header_lower: &str) -> bool {
        self.synonyms().iter().any(|s| header_lower.contains(s))
    }

    /// Look up a canonical field by its stable name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a raw header onto a canonical field, if any synonym group matches.
///
/// Matching is case-insensitive containment; priority is the declaration
/// order of [`CanonicalField::ALL`]. Unmatched headers stay untagged and are
/// excluded from dimension scoring, but remain part of the table.
#[must_use]
pub fn normalize_header(header: &str) -> Option<CanonicalField> {
    let lower = header.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    CanonicalField::ALL.iter().copied().find(|f| f.matches(&lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_synonyms() {
        assert_eq!(normalize_header("Reference"), Some(CanonicalField::Reference));
        assert_eq!(normalize_header("RefDes"), Some(CanonicalField::Reference));
        assert_eq!(normalize_header("Designator"), Some(CanonicalField::Reference));
    }

    #[test]
    fn test_part_number_synonyms() {
        assert_eq!(normalize_header("MPN"), Some(CanonicalField::PartNumber));
        assert_eq!(normalize_header("Mfr. PN"), Some(CanonicalField::PartNumber));
    }

    #[test]
    fn test_first_match_priority() {
        // "Part Number" contains "part", a Value synonym, which is declared
        // before PartNumber. The fixed priority order wins.
        assert_eq!(normalize_header("Part Number"), Some(CanonicalField::Value));
        // "Supplier Part" hits Manufacturer ("supplier") before PartNumber.
        assert_eq!(
            normalize_header("Supplier Part"),
            Some(CanonicalField::Manufacturer)
        );
    }

    #[test]
    fn test_analyzer_side_fields() {
        assert_eq!(normalize_header("Datasheet URL"), Some(CanonicalField::Datasheet));
        assert_eq!(normalize_header("Unit Price"), Some(CanonicalField::Cost));
        assert_eq!(
            normalize_header("Substitute"),
            Some(CanonicalField::Alternatives)
        );
    }

    #[test]
    fn test_unmatched_header() {
        assert_eq!(normalize_header("Notes!!"), None);
        assert_eq!(normalize_header(""), None);
        assert_eq!(normalize_header("   "), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize_header("QTY"), Some(CanonicalField::Quantity));
        assert_eq!(normalize_header("FOOTPRINT"), Some(CanonicalField::Footprint));
    }

    #[test]
    fn test_stable_names_round_trip() {
        for field in CanonicalField::ALL {
            assert_eq!(CanonicalField::from_name(field.name()), Some(field));
        }
    }
}
