//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the desired process exit code.

mod analyze;

pub use analyze::{run_analyze, run_batch, AnalyzeConfig, BatchConfig};

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process exit codes used by the CLI
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Quality score fell below the requested threshold
    pub const BELOW_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// Where report output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Stdout,
        }
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Write report output to the configured destination
pub fn write_output(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {path:?}"))?;
            tracing::info!("Report written to {:?}", path);
            Ok(())
        }
    }
}

/// Whether colored output should be used for this target
#[must_use]
pub fn should_use_color(no_color: bool, target: &OutputTarget) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && target.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_THRESHOLD, 1);
        assert_eq!(exit_codes::ERROR, 2);
    }

    #[test]
    fn test_output_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_option(Some(PathBuf::from("out.json"))),
            OutputTarget::File(PathBuf::from("out.json"))
        );
    }

    #[test]
    fn test_file_target_never_colored() {
        let target = OutputTarget::File(PathBuf::from("out.json"));
        assert!(!should_use_color(false, &target));
        assert!(!should_use_color(true, &target));
    }
}
