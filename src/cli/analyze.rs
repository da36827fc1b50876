//! Analyze command handlers.
//!
//! `analyze` assesses one checked-out tree; `batch` runs the same pipeline
//! over a list of trees in parallel.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::pipeline::{RepoAnalyzer, RepoReport};
use crate::quality::{ComponentAnalyzer, ScoringEngine};
use crate::reports::{create_reporter, ReportFormat};

/// Analyze command configuration
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub min_score: Option<f32>,
    /// Weight overrides as `name=value` pairs, replacing all five weights.
    pub weights: Option<String>,
    pub no_color: bool,
}

/// Batch command configuration
pub struct BatchConfig {
    /// File listing one tree root per line; blank lines and `#` comments
    /// are skipped.
    pub list_file: PathBuf,
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub min_score: Option<f32>,
    pub weights: Option<String>,
    pub no_color: bool,
}

/// Run the analyze command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    let analyzer = build_analyzer(config.weights.as_deref())?;
    let report = analyzer
        .analyze_dir(&config.path)
        .with_context(|| format!("Failed to analyze {:?}", config.path))?;

    let target = OutputTarget::from_option(config.output_file);
    let reporter = create_reporter(config.format, should_use_color(config.no_color, &target));
    let rendered = reporter.generate_repo_report(&report)?;
    write_output(&rendered, &target)?;

    Ok(threshold_exit_code(report.overall_score, config.min_score))
}

/// Run the batch command, returning the desired exit code.
pub fn run_batch(config: BatchConfig) -> Result<i32> {
    let roots = read_list_file(&config.list_file)?;
    if roots.is_empty() {
        bail!("List file {:?} names no directories", config.list_file);
    }

    let analyzer = build_analyzer(config.weights.as_deref())?;
    let root_refs: Vec<&Path> = roots.iter().map(PathBuf::as_path).collect();
    let mut reports: Vec<RepoReport> = Vec::with_capacity(roots.len());
    let mut failures = 0usize;
    for (root, result) in roots.iter().zip(analyzer.analyze_batch(&root_refs)) {
        match result {
            Ok(report) => reports.push(report),
            Err(err) => {
                tracing::error!(root = %root.display(), %err, "tree analysis failed");
                failures += 1;
            }
        }
    }
    if reports.is_empty() {
        bail!("All {failures} trees failed to analyze");
    }

    let target = OutputTarget::from_option(config.output_file);
    let reporter = create_reporter(config.format, should_use_color(config.no_color, &target));
    let rendered = reporter.generate_batch_report(&reports)?;
    write_output(&rendered, &target)?;

    if failures > 0 {
        return Ok(exit_codes::ERROR);
    }
    let mean = reports.iter().map(|r| r.overall_score).sum::<f32>() / reports.len() as f32;
    Ok(threshold_exit_code(mean, config.min_score))
}

/// Build the pipeline, applying weight overrides when given.
fn build_analyzer(weights: Option<&str>) -> Result<RepoAnalyzer> {
    let mut engine = ScoringEngine::new();
    if let Some(spec) = weights {
        let map = parse_weights(spec)?;
        engine
            .adjust_weights(&map)
            .context("Invalid scoring weights")?;
    }
    Ok(RepoAnalyzer::with_analyzer(ComponentAnalyzer::with_engine(
        engine,
    )))
}

/// Parse `name=value` weight pairs separated by commas.
fn parse_weights(spec: &str) -> Result<std::collections::HashMap<String, f32>> {
    let mut map = std::collections::HashMap::new();
    for pair in spec.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let Some((name, value)) = pair.split_once('=') else {
            bail!("Malformed weight {pair:?}, expected name=value");
        };
        let value: f32 = value
            .trim()
            .parse()
            .with_context(|| format!("Malformed weight value in {pair:?}"))?;
        map.insert(name.trim().to_string(), value);
    }
    Ok(map)
}

fn read_list_file(path: &Path) -> Result<Vec<PathBuf>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read list file {path:?}"))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}

fn threshold_exit_code(score: f32, min_score: Option<f32>) -> i32 {
    if let Some(threshold) = min_score {
        if score < threshold {
            tracing::error!(
                "Quality score {:.2} is below minimum threshold {:.2}",
                score,
                threshold
            );
            return exit_codes::BELOW_THRESHOLD;
        }
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weights() {
        let map = parse_weights(
            "part_number=0.4, manufacturer=0.3,datasheet=0.1,alternatives=0.1,cost=0.1",
        )
        .expect("weights");
        assert_eq!(map.len(), 5);
        assert_eq!(map["part_number"], 0.4);
    }

    #[test]
    fn test_parse_weights_malformed() {
        assert!(parse_weights("part_number").is_err());
        assert!(parse_weights("part_number=abc").is_err());
    }

    #[test]
    fn test_build_analyzer_rejects_bad_weights() {
        assert!(build_analyzer(Some("part_number=0.9")).is_err());
        assert!(build_analyzer(None).is_ok());
    }

    #[test]
    fn test_threshold_exit_code() {
        assert_eq!(threshold_exit_code(0.5, None), exit_codes::SUCCESS);
        assert_eq!(threshold_exit_code(0.5, Some(0.4)), exit_codes::SUCCESS);
        assert_eq!(
            threshold_exit_code(0.5, Some(0.6)),
            exit_codes::BELOW_THRESHOLD
        );
    }
}
