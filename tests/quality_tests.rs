//! Quality analysis behavior over the public API.

use std::collections::HashMap;

use hardoc::model::{FormatHint, SourceContent};
use hardoc::quality::{
    aggregate, ComponentAnalyzer, Dimension, ScoreCategory, ScoreExplainer, ScoringEngine,
};
use hardoc::{classify, detect, extract::extract, NormalizedTable};

fn table_from_csv(csv: &str) -> NormalizedTable {
    extract(&SourceContent::text(csv), FormatHint::Delimited).expect("table")
}

#[test]
fn minimal_csv_detects_but_scores_zero() {
    let csv = "Reference,Value,Footprint\nR1,10k,0805\nC1,100nF,0603\n";
    let content = SourceContent::text(csv);

    assert!(detect("hardware/bom.csv", &content));
    assert_eq!(classify("hardware/bom.csv"), Some(FormatHint::Delimited));

    let table = extract(&content, FormatHint::Delimited).expect("table");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.columns().len(), 3);

    let report = ComponentAnalyzer::new().analyze(&table);
    assert_eq!(report.part_number.score, 0.0);
    assert_eq!(report.overall_score, 0.0);
    assert_eq!(report.category.name(), "inadequate");
}

#[test]
fn fully_populated_row_scores_each_dimension() {
    let csv = "Reference,Value,Manufacturer,MPN,Datasheet,Cost\n\
               R1,10k,Yageo,RC0805FR-0710KL,https://example.com/rc0805.pdf,$0.01\n";
    let report = ComponentAnalyzer::new().analyze(&table_from_csv(csv));
    assert_eq!(report.manufacturer.score, 1.0);
    assert_eq!(report.datasheet.score, 1.0);
    assert_eq!(report.cost.score, 1.0);
    assert!(report.overall_score >= 0.7);
}

#[test]
fn category_bands_partition_the_unit_interval() {
    let cases = [
        (0.0, "inadequate"),
        (0.24, "inadequate"),
        (0.25, "poor"),
        (0.49, "poor"),
        (0.50, "fair"),
        (0.74, "fair"),
        (0.75, "good"),
        (0.89, "good"),
        (0.90, "excellent"),
        (1.0, "excellent"),
    ];
    for (score, expected) in cases {
        assert_eq!(
            ScoreCategory::from_score(score).name(),
            expected,
            "score {score}"
        );
    }
}

#[test]
fn weight_replacement_changes_the_overall_score() {
    let csv = "Reference,MPN\nR1,RC0805FR-0710KL\n";
    let table = table_from_csv(csv);

    let default_report = ComponentAnalyzer::new().analyze(&table);

    let mut engine = ScoringEngine::new();
    let map: HashMap<String, f32> = [
        ("part_number", 0.6),
        ("manufacturer", 0.1),
        ("datasheet", 0.1),
        ("alternatives", 0.1),
        ("cost", 0.1),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    engine.adjust_weights(&map).expect("valid weights");
    let weighted_report = ComponentAnalyzer::with_engine(engine).analyze(&table);

    // Only part_number scores here, so doubling its weight doubles the
    // weighted contribution.
    assert!(weighted_report.overall_score > default_report.overall_score);
    assert_eq!(weighted_report.overall_score, 0.6);
    assert_eq!(default_report.overall_score, 0.3);
}

#[test]
fn invalid_weight_maps_are_rejected() {
    let mut engine = ScoringEngine::new();

    let overweight: HashMap<String, f32> = Dimension::ALL
        .into_iter()
        .map(|d| (d.name().to_string(), 0.5))
        .collect();
    assert!(engine.adjust_weights(&overweight).is_err());

    let mut unknown: HashMap<String, f32> = Dimension::ALL
        .into_iter()
        .map(|d| (d.name().to_string(), 0.2))
        .collect();
    unknown.insert("lead_time".to_string(), 0.0);
    assert!(engine.adjust_weights(&unknown).is_err());
}

#[test]
fn identical_content_yields_identical_reports() {
    let csv = "Reference,Value,MPN,Cost\nR1,10k,RC0805FR-0710KL,$0.01\nC1,100nF,,\n";
    let analyzer = ComponentAnalyzer::new();
    let a = analyzer.analyze(&table_from_csv(csv));
    let b = analyzer.analyze(&table_from_csv(csv));
    assert_eq!(a, b);
}

#[test]
fn explanations_follow_the_report() {
    let csv = "Reference,Value,Footprint\nR1,10k,0805\n";
    let report = ComponentAnalyzer::new().analyze(&table_from_csv(csv));
    let explanation = ScoreExplainer::new().explain_report(&report);

    assert_eq!(explanation.overall_score, report.overall_score);
    assert_eq!(explanation.category, report.category);
    assert_eq!(explanation.dimensions.len(), 5);
    assert!(!explanation.key_improvements.is_empty());
}

#[test]
fn aggregate_is_the_mean_of_overall_scores() {
    let rich = ComponentAnalyzer::new().analyze(&table_from_csv(
        "Reference,Manufacturer,MPN\nR1,Yageo,RC0805FR-0710KL\n",
    ));
    let sparse = ComponentAnalyzer::new().analyze(&table_from_csv("Reference,Value\nR1,10k\n"));

    let mean = aggregate(&[rich.clone(), sparse.clone()]);
    let expected = (rich.overall_score + sparse.overall_score) / 2.0;
    assert!((mean - expected).abs() < 1e-6);
    assert_eq!(aggregate(&[]), 0.0);
}
