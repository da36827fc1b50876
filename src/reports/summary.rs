//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use std::fmt::Write;

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::RepoReport;
use crate::quality::{aggregate, QualityReport, ScoreCategory};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn score_line(&self, score: f32, category: ScoreCategory) -> String {
        let color = match category {
            ScoreCategory::Excellent | ScoreCategory::Good => "green",
            ScoreCategory::Fair => "yellow",
            ScoreCategory::Poor | ScoreCategory::Inadequate => "red",
        };
        self.color(&format!("{score:.2} ({})", category.name()), color)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_repo_report(&self, report: &RepoReport) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(out, "{}", self.color("BOM Documentation Quality", "bold"))?;
        writeln!(out, "{}", self.color(&"─".repeat(40), "dim"))?;
        writeln!(out, "{}  {}", self.color("Tree:", "cyan"), report.root)?;
        writeln!(
            out,
            "{}  {} scanned, {} candidates, {} BOMs",
            self.color("Files:", "cyan"),
            report.files_scanned,
            report.candidates,
            report.boms.len()
        )?;
        writeln!(out)?;

        if report.boms.is_empty() {
            writeln!(out, "No BOM documentation found.")?;
            return Ok(out);
        }

        for bom in &report.boms {
            writeln!(
                out,
                "{} [{}] {} rows",
                self.color(&bom.path, "bold"),
                bom.format,
                bom.rows
            )?;
            writeln!(
                out,
                "  score {}",
                self.score_line(bom.quality.overall_score, bom.quality.category)
            )?;
            if !bom.quality.meets_minimum_requirements {
                writeln!(out, "  {}", self.color("below minimum requirements", "red"))?;
            }
            for rec in &bom.quality.recommendations {
                writeln!(out, "  - {rec}")?;
            }
            writeln!(out)?;
        }

        writeln!(
            out,
            "{}  {}",
            self.color("Overall:", "bold"),
            self.score_line(
                report.overall_score,
                ScoreCategory::from_score(report.overall_score)
            )
        )?;
        Ok(out)
    }

    fn generate_batch_report(&self, reports: &[RepoReport]) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(out, "{}", self.color("Batch Analysis", "bold"))?;
        writeln!(out, "{}", self.color(&"─".repeat(40), "dim"))?;
        for report in reports {
            writeln!(
                out,
                "{}  {} BOMs, score {}",
                self.color(&report.root, "bold"),
                report.boms.len(),
                self.score_line(
                    report.overall_score,
                    ScoreCategory::from_score(report.overall_score)
                )
            )?;
        }
        writeln!(out)?;

        let quality: Vec<QualityReport> = reports
            .iter()
            .flat_map(|r| r.boms.iter().map(|b| b.quality.clone()))
            .collect();
        let mean = aggregate(&quality);
        writeln!(
            out,
            "{}  {}",
            self.color("Mean:", "bold"),
            self.score_line(mean, ScoreCategory::from_score(mean))
        )?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
