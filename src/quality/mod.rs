//! BOM documentation quality analysis.
//!
//! Five dimension analyzers ([`metrics`]), a weighted scoring engine
//! ([`scorer`]), a per-table analyzer producing [`QualityReport`]s
//! ([`analyzer`]) and narrative explanations ([`explanations`]).

pub mod analyzer;
pub mod explanations;
pub mod metrics;
pub mod scorer;

pub use analyzer::{aggregate, ComponentAnalyzer, QualityReport};
pub use explanations::{ImpactLevel, ReportExplanation, ScoreExplainer, ScoreExplanation};
pub use metrics::{
    AlternativesMetrics, CostMetrics, DatasheetMetrics, ManufacturerMetrics, PartClass,
    PartNumberMetrics, PartNumberPatterns, Specificity,
};
pub use scorer::{
    Dimension, ImprovementItem, Priority, ScoreCategory, ScoreWeights, ScoringEngine,
};
