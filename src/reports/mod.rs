//! Report generation for repository analysis results.
//!
//! Two output formats:
//! - JSON: structured data for programmatic integration
//! - Summary: compact shell-friendly output

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use std::io::Write;

use thiserror::Error;

use crate::pipeline::RepoReport;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Output format of a reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Summary,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a single-repository report.
    fn generate_repo_report(&self, report: &RepoReport) -> Result<String, ReportError>;

    /// Render a batch report over several repositories.
    fn generate_batch_report(&self, reports: &[RepoReport]) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;

    /// Write a single-repository report to a writer.
    fn write_repo_report(
        &self,
        report: &RepoReport,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate_repo_report(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Write a batch report to a writer.
    fn write_batch_report(
        &self,
        reports: &[RepoReport],
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate_batch_report(reports)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}
