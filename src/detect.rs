//! BOM candidate detection.
//!
//! Classifies files in a source tree as BOM candidates using, in order:
//! binary-extension rejection, hardware-documentation directory names,
//! BOM filename patterns, and (for text-like extensions only) content
//! sniffing. Detection is boolean and never fails: content that cannot be
//! decoded simply does not detect.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{FormatHint, SourceContent};
use crate::normalize::CanonicalField;

/// Extensions that are never BOM documentation, rejected outright.
const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "svg", "webp", "pdf", "zip", "gz", "bz2", "xz",
    "tar", "7z", "rar", "exe", "dll", "so", "dylib", "bin", "o", "a", "wrl", "step", "stp", "stl",
    "ttf", "otf", "woff", "woff2", "mp3", "mp4", "avi", "mov",
];

/// Directory names that commonly hold hardware documentation.
const HARDWARE_DIRS: &[&str] = &[
    "bom",
    "hardware",
    "production",
    "fabrication",
    "manufacturing",
    "docs",
    "assembly",
    "pcb",
    "electronics",
];

/// Extensions whose content is worth sniffing for BOM indicators.
const SNIFFABLE_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Filename patterns for BOM-named files.
static FILENAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(^|[._ -])bom([._ -]|\d|\.)[^.]*\.(csv|xlsx?|ods|txt|md)$",
        r"(?i)(^|[._ -])bom\.(csv|xlsx?|ods|txt|md)$",
        r"(?i)bill[._ -]?of[._ -]?materials[^.]*\.(csv|xlsx?|ods|txt|md)$",
        r"(?i)parts?[._ -]?list[^.]*\.(csv|xlsx?|ods|txt|md)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static regex"))
    .collect()
});

/// Phrases marking BOM content inside prose.
static INDICATOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)bill\s+of\s+materials",
        r"(?i)parts?\s+list",
        r"(?i)components?\s+list",
        r"(?i)bom\s+table",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static regex"))
    .collect()
});

/// Decide whether a file is a BOM candidate.
///
/// Policy, in order: reject binary extensions; accept paths under a known
/// hardware-documentation directory; accept BOM-named files; for text-like
/// extensions, sniff content for indicator phrases or a BOM-shaped Markdown
/// header row. Returns `false` on any decode failure.
#[must_use]
pub fn detect(path: &str, content: &SourceContent) -> bool {
    let lower = path.to_lowercase();
    let ext = extension(&lower);

    if let Some(ext) = &ext {
        if BINARY_EXTENSIONS.contains(&ext.as_str()) {
            return false;
        }
    }

    if in_hardware_dir(&lower) {
        tracing::debug!(path, "detected: hardware documentation directory");
        return true;
    }

    let filename = lower.rsplit(['/', '\\']).next().unwrap_or(&lower);
    if FILENAME_PATTERNS.iter().any(|p| p.is_match(filename)) {
        tracing::debug!(path, "detected: BOM filename pattern");
        return true;
    }

    match (ext, content.as_text()) {
        (Some(ext), Some(text)) if SNIFFABLE_EXTENSIONS.contains(&ext.as_str()) => {
            sniff_text(text)
        }
        _ => false,
    }
}

/// Route a candidate path to the extractor format family.
///
/// Returns `None` for rejected binary extensions; everything else falls back
/// to free-text extraction.
#[must_use]
pub fn classify(path: &str) -> Option<FormatHint> {
    let lower = path.to_lowercase();
    let ext = extension(&lower)?;
    match ext.as_str() {
        "csv" | "tsv" => Some(FormatHint::Delimited),
        "xlsx" | "xls" | "ods" => Some(FormatHint::Spreadsheet),
        "md" | "markdown" => Some(FormatHint::Markdown),
        _ if BINARY_EXTENSIONS.contains(&ext.as_str()) => None,
        _ => Some(FormatHint::FreeText),
    }
}

/// Byte offset just past the first BOM indicator phrase, if any.
///
/// Shared with the free-text extractor, which searches the region following
/// the indicator for an embedded table.
#[must_use]
pub fn indicator_offset(text: &str) -> Option<usize> {
    INDICATOR_PATTERNS
        .iter()
        .filter_map(|p| p.find(text).map(|m| m.end()))
        .min()
}

/// Whether a Markdown-style header row looks BOM-shaped: it must name both a
/// reference-like and a value-like column.
#[must_use]
pub fn is_likely_bom_header<S: AsRef<str>>(cells: &[S]) -> bool {
    let mut has_reference = false;
    let mut has_value = false;
    for cell in cells {
        let lower = cell.as_ref().trim().to_lowercase();
        has_reference |= CanonicalField::Reference.matches(&lower);
        has_value |= CanonicalField::Value.matches(&lower);
    }
    has_reference && has_value
}

fn extension(path_lower: &str) -> Option<String> {
    let filename = path_lower.rsplit(['/', '\\']).next()?;
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}

fn in_hardware_dir(path_lower: &str) -> bool {
    let mut segments: Vec<&str> = path_lower.split(['/', '\\']).collect();
    // The last segment is the filename, not a directory.
    segments.pop();
    segments
        .iter()
        .any(|segment| HARDWARE_DIRS.contains(segment))
}

fn sniff_text(text: &str) -> bool {
    if indicator_offset(text).is_some() {
        return true;
    }

    // A pipe-table header row naming reference and value columns is enough
    // even without an indicator phrase.
    for line in text.lines() {
        let trimmed = line.trim();
        if !trimmed.contains('|') {
            continue;
        }
        let cells: Vec<&str> = trimmed
            .split('|')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        if cells.len() >= 2 && is_likely_bom_header(&cells) {
            return true;
        }
    }
    false
}
