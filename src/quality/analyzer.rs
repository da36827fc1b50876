//! Full per-table quality analysis.

use serde::{Deserialize, Serialize};

use crate::model::NormalizedTable;
use crate::quality::metrics::{
    AlternativesMetrics, CostMetrics, DatasheetMetrics, ManufacturerMetrics, PartNumberMetrics,
};
use crate::quality::scorer::{Dimension, ScoreCategory, ScoringEngine};

/// Complete quality assessment of one BOM table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub part_number: PartNumberMetrics,
    pub manufacturer: ManufacturerMetrics,
    pub datasheet: DatasheetMetrics,
    pub alternatives: AlternativesMetrics,
    pub cost: CostMetrics,
    /// Weighted mean of the five dimension scores, rounded to 2 decimals.
    pub overall_score: f32,
    pub category: ScoreCategory,
    pub meets_minimum_requirements: bool,
    pub recommendations: Vec<String>,
}

impl QualityReport {
    /// The five dimension scores in canonical order.
    #[must_use]
    pub fn dimension_scores(&self) -> [(Dimension, f32); 5] {
        [
            (Dimension::PartNumber, self.part_number.score),
            (Dimension::Manufacturer, self.manufacturer.score),
            (Dimension::Datasheet, self.datasheet.score),
            (Dimension::Alternatives, self.alternatives.score),
            (Dimension::Cost, self.cost.score),
        ]
    }

    /// Score of one dimension.
    #[must_use]
    pub fn score(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::PartNumber => self.part_number.score,
            Dimension::Manufacturer => self.manufacturer.score,
            Dimension::Datasheet => self.datasheet.score,
            Dimension::Alternatives => self.alternatives.score,
            Dimension::Cost => self.cost.score,
        }
    }
}

/// Runs the five dimension analyzers and folds the results into a
/// [`QualityReport`] with the engine's weights.
#[derive(Debug, Clone, Default)]
pub struct ComponentAnalyzer {
    engine: ScoringEngine,
}

impl ComponentAnalyzer {
    /// Analyzer with default weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer scoring with a caller-configured engine.
    #[must_use]
    pub const fn with_engine(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// The scoring engine in use.
    #[must_use]
    pub const fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Analyze one table. Never fails: empty or unrecognized tables yield
    /// a valid all-zero report.
    #[must_use]
    pub fn analyze(&self, table: &NormalizedTable) -> QualityReport {
        let part_number = PartNumberMetrics::from_table(table);
        let manufacturer = ManufacturerMetrics::from_table(table);
        let datasheet = DatasheetMetrics::from_table(table);
        let alternatives = AlternativesMetrics::from_table(table);
        let cost = CostMetrics::from_table(table);

        let scores = [
            (Dimension::PartNumber, part_number.score),
            (Dimension::Manufacturer, manufacturer.score),
            (Dimension::Datasheet, datasheet.score),
            (Dimension::Alternatives, alternatives.score),
            (Dimension::Cost, cost.score),
        ];
        let overall_score = self.engine.overall_score(&scores);
        let category = ScoreCategory::from_score(overall_score);
        let meets_minimum_requirements = self.engine.meets_minimum_requirements(&scores);

        tracing::debug!(
            overall_score = %overall_score,
            category = category.name(),
            rows = table.row_count(),
            "analyzed table"
        );

        let recommendations =
            recommendations(&part_number, &manufacturer, &datasheet, &alternatives, &cost);

        QualityReport {
            part_number,
            manufacturer,
            datasheet,
            alternatives,
            cost,
            overall_score,
            category,
            meets_minimum_requirements,
            recommendations,
        }
    }
}

/// Arithmetic mean of the overall scores, 0.0 for an empty slice.
#[must_use]
pub fn aggregate(reports: &[QualityReport]) -> f32 {
    if reports.is_empty() {
        return 0.0;
    }
    reports.iter().map(|r| r.overall_score).sum::<f32>() / reports.len() as f32
}

/// Report-level improvement recommendations from the metric details.
fn recommendations(
    part_number: &PartNumberMetrics,
    manufacturer: &ManufacturerMetrics,
    datasheet: &DatasheetMetrics,
    alternatives: &AlternativesMetrics,
    cost: &CostMetrics,
) -> Vec<String> {
    let mut out = Vec::new();
    if part_number.score < 0.8 {
        out.push("Improve part number specificity by using manufacturer part numbers".to_string());
    }
    if manufacturer.score < 0.8 {
        out.push("Add manufacturer information for components".to_string());
    }
    if !datasheet.has_datasheet_links {
        out.push("Include datasheet links for components".to_string());
    } else if datasheet.broken_links > 0 {
        out.push("Fix broken datasheet links".to_string());
    }
    if !alternatives.has_alternatives {
        out.push("Consider adding alternative part suggestions".to_string());
    }
    if !cost.has_cost_info {
        out.push("Add cost information for better project planning".to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawTable;

    fn table(headers: &[&str], rows: &[&[&str]]) -> NormalizedTable {
        let raw = RawTable::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|r| {
                    r.iter()
                        .map(|c| {
                            if c.is_empty() {
                                None
                            } else {
                                Some((*c).to_string())
                            }
                        })
                        .collect()
                })
                .collect(),
        );
        NormalizedTable::from_raw(raw).expect("table")
    }

    #[test]
    fn test_minimal_bom_scores_inadequate() {
        let t = table(
            &["Reference", "Value", "Footprint"],
            &[&["R1", "10k", "0805"], &["C1", "100nF", "0603"]],
        );
        let report = ComponentAnalyzer::new().analyze(&t);
        assert_eq!(report.part_number.score, 0.0);
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.category, ScoreCategory::Inadequate);
        assert!(!report.meets_minimum_requirements);
    }

    #[test]
    fn test_rich_bom_scores_high() {
        let t = table(
            &["Reference", "Value", "Manufacturer", "MPN", "Datasheet", "Cost"],
            &[&[
                "R1",
                "10k",
                "Yageo",
                "RC0805FR-0710KL",
                "https://example.com/rc0805.pdf",
                "$0.01",
            ]],
        );
        let report = ComponentAnalyzer::new().analyze(&t);
        assert_eq!(report.manufacturer.score, 1.0);
        assert_eq!(report.datasheet.score, 1.0);
        assert_eq!(report.cost.score, 1.0);
        assert_eq!(report.part_number.score, 1.0);
        assert!(report.overall_score >= 0.7);
    }

    #[test]
    fn test_recommendation_selection() {
        let t = table(
            &["Reference", "Value", "Footprint"],
            &[&["R1", "10k", "0805"]],
        );
        let report = ComponentAnalyzer::new().analyze(&t);
        let recs = &report.recommendations;
        assert!(recs.iter().any(|r| r.contains("part number")));
        assert!(recs.iter().any(|r| r.contains("manufacturer")));
        assert!(recs.iter().any(|r| r.contains("datasheet links")));
        assert!(recs.iter().any(|r| r.contains("alternative")));
        assert!(recs.iter().any(|r| r.contains("cost")));
    }

    #[test]
    fn test_broken_link_recommendation() {
        let t = table(
            &["Reference", "Datasheet"],
            &[&["R1", "www.example.com/r.pdf"]],
        );
        let report = ComponentAnalyzer::new().analyze(&t);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("broken datasheet links")));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let t = table(
            &["Reference", "MPN", "Cost"],
            &[&["R1", "RC0805FR-0710KL", "$0.01"], &["C1", "", "0.02"]],
        );
        let analyzer = ComponentAnalyzer::new();
        assert_eq!(analyzer.analyze(&t), analyzer.analyze(&t));
    }

    #[test]
    fn test_aggregate_mean() {
        let t1 = table(&["Reference", "Value"], &[&["R1", "10k"]]);
        let analyzer = ComponentAnalyzer::new();
        let r1 = analyzer.analyze(&t1);
        assert_eq!(aggregate(&[]), 0.0);
        assert_eq!(aggregate(&[r1.clone()]), r1.overall_score);
        let mean = aggregate(&[r1.clone(), r1.clone()]);
        assert!((mean - r1.overall_score).abs() < 1e-6);
    }
}
