//! Core data model: source content, detection artifacts and tables.
//!
//! Everything downstream of extraction operates on [`NormalizedTable`], a
//! format-independent rectangular view of a BOM with canonical field tags
//! attached to recognized headers.

mod artifact;
mod table;

pub use artifact::{CandidateArtifact, FormatHint, SourceContent};
pub use table::{Column, NormalizedTable, RawTable};
