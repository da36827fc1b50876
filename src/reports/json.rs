//! JSON report generator.

use chrono::Utc;
use serde::Serialize;

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::RepoReport;
use crate::quality::{aggregate, QualityReport, ReportExplanation, ScoreExplainer};

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
    /// Attach narrative explanations per BOM
    explain: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pretty: true,
            explain: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Include or omit narrative explanations
    #[must_use]
    pub const fn explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(out)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

impl JsonReportMetadata {
    fn now() -> Self {
        Self {
            tool: ToolInfo {
                name: "hardoc",
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct BomExplanation<'a> {
    path: &'a str,
    explanation: ReportExplanation,
}

#[derive(Serialize)]
struct JsonRepoReport<'a> {
    metadata: JsonReportMetadata,
    repository: &'a RepoReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanations: Option<Vec<BomExplanation<'a>>>,
}

#[derive(Serialize)]
struct JsonBatchReport<'a> {
    metadata: JsonReportMetadata,
    repositories: &'a [RepoReport],
    aggregate_score: f32,
}

impl ReportGenerator for JsonReporter {
    fn generate_repo_report(&self, report: &RepoReport) -> Result<String, ReportError> {
        let explanations = self.explain.then(|| {
            let explainer = ScoreExplainer::new();
            report
                .boms
                .iter()
                .map(|bom| BomExplanation {
                    path: &bom.path,
                    explanation: explainer.explain_report(&bom.quality),
                })
                .collect()
        });
        self.render(&JsonRepoReport {
            metadata: JsonReportMetadata::now(),
            repository: report,
            explanations,
        })
    }

    fn generate_batch_report(&self, reports: &[RepoReport]) -> Result<String, ReportError> {
        let quality: Vec<QualityReport> = reports
            .iter()
            .flat_map(|r| r.boms.iter().map(|b| b.quality.clone()))
            .collect();
        self.render(&JsonBatchReport {
            metadata: JsonReportMetadata::now(),
            repositories: reports,
            aggregate_score: aggregate(&quality),
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceContent;
    use crate::pipeline::{FileEntry, RepoAnalyzer};

    fn sample_report() -> RepoReport {
        let entries = vec![FileEntry::new(
            "hardware/bom.csv",
            SourceContent::text("Reference,Value,MPN\nR1,10k,RC0805FR-0710KL\n"),
        )];
        RepoAnalyzer::new().analyze_entries("demo", entries)
    }

    #[test]
    fn test_json_report_structure() {
        let rendered = JsonReporter::new()
            .generate_repo_report(&sample_report())
            .expect("json");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["metadata"]["tool"]["name"], "hardoc");
        assert_eq!(value["repository"]["root"], "demo");
        assert_eq!(value["repository"]["boms"][0]["path"], "hardware/bom.csv");
        assert!(value["explanations"][0]["explanation"]["summary"].is_string());
    }

    #[test]
    fn test_explanations_can_be_omitted() {
        let rendered = JsonReporter::new()
            .explain(false)
            .generate_repo_report(&sample_report())
            .expect("json");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert!(value.get("explanations").is_none());
    }

    #[test]
    fn test_batch_report_aggregate() {
        let report = sample_report();
        let expected = report.boms[0].quality.overall_score;
        let rendered = JsonReporter::new()
            .pretty(false)
            .generate_batch_report(&[report])
            .expect("json");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        let aggregate_score = value["aggregate_score"].as_f64().expect("score") as f32;
        assert!((aggregate_score - expected).abs() < 1e-6);
    }
}
