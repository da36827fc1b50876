//! Unified error types for hardoc.
//!
//! The analysis core is deliberately forgiving: unreadable files, missing
//! tables and empty BOMs are ordinary outcomes (`false` / `None` / a
//! zero-score report), not errors. The variants here cover the remaining
//! cases — misconfiguration and I/O at the edges of the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hardoc operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HardocError {
    /// A scoring weight update was rejected.
    ///
    /// This is the only failure surfaced by the analysis core itself: it
    /// signals a programming or configuration mistake, not messy input.
    #[error("invalid scoring weights: {reason}")]
    InvalidWeights { reason: String },

    /// IO errors with the offending path attached.
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Errors during report generation.
    #[error("report generation failed: {0}")]
    Report(String),

    /// Configuration errors from the CLI layer.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl HardocError {
    /// Construct an [`HardocError::Io`] from a path and source error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Construct an [`HardocError::InvalidWeights`] with a reason.
    pub fn invalid_weights(reason: impl Into<String>) -> Self {
        Self::InvalidWeights {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for HardocError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(err.to_string())
    }
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HardocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_weights_message() {
        let err = HardocError::invalid_weights("weights sum to 1.5");
        assert_eq!(
            err.to_string(),
            "invalid scoring weights: weights sum to 1.5"
        );
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = HardocError::io(
            "boms/bom.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("bom.csv"));
    }
}
