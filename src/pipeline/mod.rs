//! Repository analysis pipeline.
//!
//! Walks a checked-out source tree, runs each file through detection,
//! extraction and quality analysis, and folds the results into a
//! per-repository report. The core stages are pure over in-memory
//! `(path, content)` pairs; filesystem walking lives only in
//! [`RepoAnalyzer::analyze_dir`].

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{HardocError, Result};
use crate::model::{CandidateArtifact, SourceContent};
use crate::quality::{aggregate, ComponentAnalyzer, QualityReport};
use crate::{classify, detect};

/// Files larger than this are skipped during tree walks.
const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// One file of a source tree, already read into memory.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the tree root.
    pub path: String,
    pub content: SourceContent,
}

impl FileEntry {
    /// Create an entry from a path and content.
    pub fn new(path: impl Into<String>, content: SourceContent) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// Analysis of one extracted BOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomReport {
    /// Path of the source file within the tree.
    pub path: String,
    /// Format family the table was extracted from.
    pub format: String,
    /// Data rows in the extracted table.
    pub rows: usize,
    /// Canonical fields recognized among the table's headers.
    pub recognized_fields: Vec<String>,
    pub quality: QualityReport,
}

/// Aggregated analysis of one repository tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoReport {
    /// Tree root this report describes.
    pub root: String,
    /// Files considered during the walk.
    pub files_scanned: usize,
    /// Files that passed BOM detection.
    pub candidates: usize,
    /// Successfully extracted and analyzed BOMs, in walk order.
    pub boms: Vec<BomReport>,
    /// Arithmetic mean of the per-BOM overall scores, 0.0 with no BOMs.
    pub overall_score: f32,
}

/// Runs the detect -> extract -> analyze pipeline over source trees.
#[derive(Debug, Clone, Default)]
pub struct RepoAnalyzer {
    analyzer: ComponentAnalyzer,
}

impl RepoAnalyzer {
    /// Pipeline with default scoring weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline scoring with a caller-configured analyzer.
    #[must_use]
    pub const fn with_analyzer(analyzer: ComponentAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Analyze an in-memory sequence of `(path, content)` pairs.
    ///
    /// Entries are processed in input order; files that do not detect, or
    /// detect but yield no table, are counted and skipped.
    #[must_use]
    pub fn analyze_entries(&self, root: impl Into<String>, entries: Vec<FileEntry>) -> RepoReport {
        let root = root.into();
        let files_scanned = entries.len();
        let mut candidates = 0usize;
        let mut boms = Vec::new();

        for entry in entries {
            if !detect(&entry.path, &entry.content) {
                continue;
            }
            candidates += 1;
            let Some(hint) = classify(&entry.path) else {
                continue;
            };
            let artifact = CandidateArtifact::new(entry.path.clone(), entry.content, hint);
            let Some(table) = artifact.into_table() else {
                tracing::debug!(path = %entry.path, "candidate yielded no table");
                continue;
            };
            let quality = self.analyzer.analyze(&table);
            boms.push(BomReport {
                path: entry.path,
                format: hint.name().to_string(),
                rows: table.row_count(),
                recognized_fields: table
                    .recognized_fields()
                    .into_iter()
                    .map(|f| f.name().to_string())
                    .collect(),
                quality,
            });
        }

        let reports: Vec<QualityReport> = boms.iter().map(|b| b.quality.clone()).collect();
        let overall_score = aggregate(&reports);
        tracing::debug!(
            root = %root,
            files_scanned,
            candidates,
            boms = boms.len(),
            overall_score = %overall_score,
            "analyzed tree"
        );

        RepoReport {
            root,
            files_scanned,
            candidates,
            boms,
            overall_score,
        }
    }

    /// Walk a directory tree and analyze it.
    ///
    /// Hidden entries are skipped, as are files over the size cap or with
    /// unreadable content; only a missing or unreadable root is an error.
    pub fn analyze_dir(&self, root: &Path) -> Result<RepoReport> {
        if !root.is_dir() {
            return Err(HardocError::io(
                root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            ));
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(%err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.metadata().map(|m| m.len()).unwrap_or(0) > MAX_FILE_BYTES {
                tracing::warn!(path = %entry.path().display(), "skipping oversized file");
                continue;
            }
            let bytes = match fs::read(entry.path()) {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::warn!(path = %entry.path().display(), %err, "skipping unreadable file");
                    continue;
                }
            };
            let content = match String::from_utf8(bytes) {
                Ok(text) => SourceContent::Text(text),
                Err(err) => SourceContent::Binary(err.into_bytes()),
            };
            let path = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .into_owned();
            entries.push(FileEntry::new(path, content));
        }

        Ok(self.analyze_entries(root.to_string_lossy(), entries))
    }

    /// Analyze many trees in parallel.
    ///
    /// Each tree is independent, so the batch fans out across the rayon
    /// pool; results come back in input order regardless of completion
    /// order.
    pub fn analyze_batch(&self, roots: &[&Path]) -> Vec<Result<RepoReport>> {
        roots.par_iter().map(|root| self.analyze_dir(root)).collect()
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Reference,Value,MPN\nR1,10k,RC0805FR-0710KL\nC1,100nF,\n";

    #[test]
    fn test_entries_pipeline_end_to_end() {
        let entries = vec![
            FileEntry::new("README.md", SourceContent::text("just a readme")),
            FileEntry::new("hardware/bom.csv", SourceContent::text(CSV)),
            FileEntry::new("src/main.rs", SourceContent::text("fn main() {}")),
        ];
        let report = RepoAnalyzer::new().analyze_entries("demo", entries);
        assert_eq!(report.files_scanned, 3);
        assert_eq!(report.candidates, 1);
        assert_eq!(report.boms.len(), 1);

        let bom = &report.boms[0];
        assert_eq!(bom.path, "hardware/bom.csv");
        assert_eq!(bom.format, "delimited");
        assert_eq!(bom.rows, 2);
        assert!(bom.recognized_fields.contains(&"part_number".to_string()));
        assert_eq!(report.overall_score, bom.quality.overall_score);
    }

    #[test]
    fn test_candidate_without_table_is_counted_but_not_reported() {
        let entries = vec![FileEntry::new(
            "docs/assembly.txt",
            SourceContent::text("See the parts list in the wiki.\n"),
        )];
        let report = RepoAnalyzer::new().analyze_entries("demo", entries);
        assert_eq!(report.candidates, 1);
        assert!(report.boms.is_empty());
        assert_eq!(report.overall_score, 0.0);
    }

    #[test]
    fn test_empty_tree() {
        let report = RepoAnalyzer::new().analyze_entries("demo", Vec::new());
        assert_eq!(report.files_scanned, 0);
        assert_eq!(report.overall_score, 0.0);
    }

    #[test]
    fn test_overall_score_is_mean_of_boms() {
        let rich = "Reference,Value,Manufacturer,MPN,Datasheet,Cost\n\
                    R1,10k,Yageo,RC0805FR-0710KL,https://example.com/r.pdf,$0.01\n";
        let entries = vec![
            FileEntry::new("bom/full.csv", SourceContent::text(rich)),
            FileEntry::new("bom/sparse.csv", SourceContent::text("Reference,Value\nR1,10k\n")),
        ];
        let report = RepoAnalyzer::new().analyze_entries("demo", entries);
        assert_eq!(report.boms.len(), 2);
        let mean = (report.boms[0].quality.overall_score + report.boms[1].quality.overall_score)
            / 2.0;
        assert!((report.overall_score - mean).abs() < 1e-6);
    }
}
