//! Detection artifacts: file content and format classification.

use serde::{Deserialize, Serialize};

/// Format family a candidate file is routed to for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatHint {
    /// Separator-delimited text (csv, tsv, semicolon, pipe).
    Delimited,
    /// Binary spreadsheet workbook (xlsx, xls, ods).
    Spreadsheet,
    /// Markdown document with pipe tables.
    Markdown,
    /// Free text that may embed a table after a BOM indicator phrase.
    FreeText,
}

impl FormatHint {
    /// Human-readable name of this format family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Delimited => "delimited",
            Self::Spreadsheet => "spreadsheet",
            Self::Markdown => "markdown",
            Self::FreeText => "free-text",
        }
    }
}

/// File content as read from a source tree.
///
/// Spreadsheets arrive as bytes; everything else the pipeline cares about is
/// UTF-8 text. Content that fails to decode stays `Binary` and is simply
/// never sniffed — decode failure is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceContent {
    Text(String),
    Binary(Vec<u8>),
}

impl SourceContent {
    /// Wrap text content.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Wrap binary content.
    #[must_use]
    pub fn binary(content: Vec<u8>) -> Self {
        Self::Binary(content)
    }

    /// The content as text, if it is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Binary(_) => None,
        }
    }

    /// The content as raw bytes, if it is binary.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(b) => Some(b),
            Self::Text(_) => None,
        }
    }
}

/// A file or text fragment that passed BOM detection.
///
/// Created once per discovered candidate and consumed exactly once by the
/// extractor; it is not retained after extraction.
#[derive(Debug, Clone)]
pub struct CandidateArtifact {
    /// Path (or other identifier) of the candidate within the source tree.
    pub path: String,
    /// Raw content handed to the extractor.
    pub content: SourceContent,
    /// Format family the extractor should try.
    pub hint: FormatHint,
}

impl CandidateArtifact {
    /// Create a new candidate for extraction.
    pub fn new(path: impl Into<String>, content: SourceContent, hint: FormatHint) -> Self {
        Self {
            path: path.into(),
            content,
            hint,
        }
    }

    /// Extract the candidate into a normalized table, consuming it.
    ///
    /// Returns `None` when no parseable table is found; that is an expected
    /// outcome ("no BOM here"), never an error.
    #[must_use]
    pub fn into_table(self) -> Option<crate::model::NormalizedTable> {
        crate::extract::extract(&self.content, self.hint)
    }
}
