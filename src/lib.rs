//! **A library for finding and scoring hardware BOM documentation.**
//!
//! `hardoc` scans hardware project source trees for bill-of-materials
//! documentation — CSV exports, spreadsheets, Markdown tables, or tables
//! embedded in prose — and assesses its quality for reproducibility.
//!
//! ## Key Features
//!
//! - **Detection**: identifies BOM candidates by directory conventions,
//!   filename patterns, and content sniffing, without ever failing on
//!   messy input.
//! - **Extraction**: named per-format strategies turn delimited text,
//!   workbooks, Markdown tables, and free text into one normalized table
//!   shape.
//! - **Normalization**: maps arbitrary column headers onto a fixed
//!   vocabulary of canonical semantic fields by first-match priority.
//! - **Quality scoring**: five independent dimensions (part numbers,
//!   manufacturers, datasheets, alternatives, cost) folded into a weighted
//!   overall score with category bands, minimum-requirement floors, and an
//!   improvement ranking.
//! - **Explanations and reports**: narrative summaries plus JSON and
//!   terminal output.
//!
//! ## Core Concepts & Modules
//!
//! - **[`detect`]**: the [`detect()`] / [`classify()`] entry points deciding
//!   whether and how a file is worth parsing.
//! - **[`extract`]**: the [`extract::extract`] router and its strategies,
//!   producing a [`NormalizedTable`].
//! - **[`normalize`]**: the canonical field vocabulary
//!   ([`CanonicalField`]) — a stable compatibility surface.
//! - **[`quality`]**: dimension metrics, the [`ScoringEngine`], the
//!   [`ComponentAnalyzer`] producing [`QualityReport`]s, and the
//!   [`ScoreExplainer`].
//! - **[`pipeline`]**: walks whole source trees and aggregates per-repo
//!   reports; batch mode fans out across trees.
//! - **[`reports`]**: JSON and summary report generators.
//!
//! ## Getting Started: Scoring One Table
//!
//! ```
//! use hardoc::model::{FormatHint, SourceContent};
//! use hardoc::quality::ComponentAnalyzer;
//!
//! let content = SourceContent::text(
//!     "Reference,Value,MPN,Datasheet\n\
//!      R1,10k,RC0805FR-0710KL,https://example.com/rc0805.pdf\n",
//! );
//! let table = hardoc::extract::extract(&content, FormatHint::Delimited)
//!     .expect("a parseable table");
//! let report = ComponentAnalyzer::new().analyze(&table);
//! println!("score {:.2} ({})", report.overall_score, report.category.name());
//! ```
//!
//! ## Scoring a Whole Tree
//!
//! ```no_run
//! use std::path::Path;
//! use hardoc::pipeline::RepoAnalyzer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = RepoAnalyzer::new().analyze_dir(Path::new("path/to/project"))?;
//!     println!("{} BOMs, overall {:.2}", report.boms.len(), report.overall_score);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize→f32 casts appear throughout the score math — row
    // counts are far below f32 precision limits in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Report structs legitimately carry many bools as presence flags
    clippy::struct_excessive_bools
)]

pub mod cli;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod quality;
pub mod reports;

pub use detect::{classify, detect};
pub use error::{HardocError, Result};
pub use model::{CandidateArtifact, FormatHint, NormalizedTable, SourceContent};
pub use normalize::{normalize_header, CanonicalField};
pub use pipeline::{RepoAnalyzer, RepoReport};
pub use quality::{
    aggregate, ComponentAnalyzer, QualityReport, ScoreCategory, ScoreExplainer, ScoreWeights,
    ScoringEngine,
};
