//! Human-readable explanations for quality scores.
//!
//! Pure functions of a report's dimension scores. Sentences are picked from
//! static templates by score band; the per-dimension impact severity is a
//! fixed lookup, not computed.

use serde::{Deserialize, Serialize};

use crate::quality::analyzer::QualityReport;
use crate::quality::scorer::{Dimension, Priority, ScoreCategory, ScoringEngine};

/// How strongly a dimension affects downstream use of the documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    /// One-sentence description of the impact level.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Critical => "Has major impact on project reproducibility",
            Self::High => "Significantly affects project usability",
            Self::Medium => "Moderately impacts project quality",
            Self::Low => "Minor impact on overall quality",
        }
    }
}

/// Static per-dimension strength/weakness sentences and impact severity.
struct DimensionTemplate {
    high: &'static str,
    medium: &'static str,
    low: &'static str,
    impact: ImpactLevel,
}

const fn template(dimension: Dimension) -> DimensionTemplate {
    match dimension {
        Dimension::PartNumber => DimensionTemplate {
            high: "Part numbers are specific and well-documented",
            medium: "Most parts have identifiable numbers",
            low: "Many parts lack specific identification",
            impact: ImpactLevel::Critical,
        },
        Dimension::Manufacturer => DimensionTemplate {
            high: "Manufacturer information is complete",
            medium: "Basic manufacturer details provided",
            low: "Limited manufacturer information",
            impact: ImpactLevel::High,
        },
        Dimension::Datasheet => DimensionTemplate {
            high: "Comprehensive datasheet coverage",
            medium: "Most critical components have datasheets",
            low: "Missing many important datasheets",
            impact: ImpactLevel::High,
        },
        Dimension::Alternatives => DimensionTemplate {
            high: "Good alternative parts coverage",
            medium: "Some alternative parts listed",
            low: "Few or no alternative parts",
            impact: ImpactLevel::Medium,
        },
        Dimension::Cost => DimensionTemplate {
            high: "Detailed cost information available",
            medium: "Basic cost information provided",
            low: "Limited or no cost information",
            impact: ImpactLevel::Medium,
        },
    }
}

/// Explanation of a single dimension score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreExplanation {
    pub dimension: Dimension,
    pub score: f32,
    pub category: ScoreCategory,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub impact: ImpactLevel,
}

/// Narrative explanation of a full report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportExplanation {
    pub overall_score: f32,
    pub category: ScoreCategory,
    pub summary: String,
    pub dimensions: Vec<ScoreExplanation>,
    /// High-priority improvements, largest potential gain first.
    pub key_improvements: Vec<String>,
    /// Medium-priority improvements worth picking up cheaply.
    pub quick_wins: Vec<String>,
}

/// Turns scores into narrative explanations.
#[derive(Debug, Clone, Default)]
pub struct ScoreExplainer {
    engine: ScoringEngine,
}

impl ScoreExplainer {
    /// Explainer ranking improvements with default weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Explainer using a caller-configured engine for improvement ranking.
    #[must_use]
    pub const fn with_engine(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// Explain a single dimension score.
    #[must_use]
    pub fn explain_dimension(&self, dimension: Dimension, score: f32) -> ScoreExplanation {
        let template = template(dimension);
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        if score >= 0.75 {
            strengths.push(template.high.to_string());
        } else if score >= 0.5 {
            strengths.push(template.medium.to_string());
            weaknesses.push("Room for improvement".to_string());
        } else {
            weaknesses.push(template.low.to_string());
        }

        ScoreExplanation {
            dimension,
            score,
            category: ScoreCategory::from_score(score),
            strengths,
            weaknesses,
            recommendations: dimension_recommendations(dimension, score),
            impact: template.impact,
        }
    }

    /// Explain a full report: summary, per-dimension explanations and the
    /// improvement ranking split into key improvements and quick wins.
    #[must_use]
    pub fn explain_report(&self, report: &QualityReport) -> ReportExplanation {
        let scores = report.dimension_scores();
        let dimensions = scores
            .iter()
            .map(|&(dimension, score)| self.explain_dimension(dimension, score))
            .collect();

        let mut key_improvements = Vec::new();
        let mut quick_wins = Vec::new();
        for item in self.engine.improvement_potential(&scores) {
            match item.priority {
                Priority::High => key_improvements.push(format!(
                    "Focus on improving {} (potential gain: {:.2})",
                    item.dimension.name(),
                    item.potential_gain
                )),
                Priority::Medium => {
                    quick_wins.push(format!("Consider enhancing {}", item.dimension.name()));
                }
                Priority::Low => {}
            }
        }

        ReportExplanation {
            overall_score: report.overall_score,
            category: report.category,
            summary: summary(report.overall_score, report.meets_minimum_requirements).to_string(),
            dimensions,
            key_improvements,
            quick_wins,
        }
    }
}

/// Static impact severity of one dimension.
#[must_use]
pub const fn impact_of(dimension: Dimension) -> ImpactLevel {
    template(dimension).impact
}

/// 0-3 recommendations gated by static sub-thresholds.
fn dimension_recommendations(dimension: Dimension, score: f32) -> Vec<String> {
    let mut out = Vec::new();
    match dimension {
        Dimension::PartNumber => {
            if score < 0.8 {
                out.push("Use manufacturer part numbers where possible".to_string());
                out.push("Avoid generic descriptors".to_string());
            }
            if score < 0.5 {
                out.push("Add detailed part specifications".to_string());
            }
        }
        Dimension::Manufacturer => {
            if score < 0.7 {
                out.push("Include manufacturer names for all components".to_string());
                out.push("Add manufacturer contact or ordering information".to_string());
            }
        }
        Dimension::Datasheet => {
            if score < 0.9 {
                out.push("Provide datasheet links for all components".to_string());
            }
            if score < 0.5 {
                out.push("Verify and update broken datasheet links".to_string());
            }
        }
        Dimension::Alternatives => {
            if score < 0.6 {
                out.push("List alternative parts for critical components".to_string());
                out.push("Include cross-reference information".to_string());
            }
        }
        Dimension::Cost => {
            if score < 0.7 {
                out.push("Add unit costs for components".to_string());
                out.push("Include currency information".to_string());
            }
        }
    }
    out
}

/// Overall summary sentence, keyed off the category bands and the
/// minimum-requirements check at the fair band.
fn summary(overall_score: f32, meets_minimum: bool) -> &'static str {
    if overall_score >= 0.9 {
        "Excellent documentation quality with comprehensive component information"
    } else if overall_score >= 0.75 {
        "Good documentation quality with some room for improvement"
    } else if overall_score >= 0.5 {
        if meets_minimum {
            "Acceptable documentation with several areas needing improvement"
        } else {
            "Documentation meets basic needs but requires significant enhancement"
        }
    } else {
        "Documentation needs substantial improvement for project reproducibility"
    }
}
