//! End-to-end pipeline tests over real directory trees.

use std::fs;
use std::path::Path;

use hardoc::pipeline::RepoAnalyzer;
use hardoc::quality::ScoreCategory;

const SPARSE_BOM: &str = "Reference,Value,Footprint\nR1,10k,0805\nC1,100nF,0603\n";

const RICH_BOM: &str = "\
Reference,Value,Manufacturer,MPN,Datasheet,Cost
R1,10k,Yageo,RC0805FR-0710KL,https://example.com/rc0805.pdf,$0.01
C1,100nF,Murata,GRM188R71H104KA93D,https://example.com/grm188.pdf,$0.02
";

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, content).expect("write file");
}

#[test]
fn analyze_dir_finds_bom_in_hardware_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_file(dir.path(), "hardware/main.csv", SPARSE_BOM);
    write_file(dir.path(), "src/main.rs", "fn main() {}\n");
    write_file(dir.path(), "README.md", "# A project\n");

    let report = RepoAnalyzer::new()
        .analyze_dir(dir.path())
        .expect("analyze");
    assert_eq!(report.candidates, 1);
    assert_eq!(report.boms.len(), 1);
    assert_eq!(report.boms[0].path, "hardware/main.csv");
    assert_eq!(report.boms[0].rows, 2);
    assert_eq!(report.boms[0].quality.category, ScoreCategory::Inadequate);
}

#[test]
fn analyze_dir_scores_rich_bom_higher() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_file(dir.path(), "bom.csv", RICH_BOM);

    let report = RepoAnalyzer::new()
        .analyze_dir(dir.path())
        .expect("analyze");
    assert_eq!(report.boms.len(), 1);
    let quality = &report.boms[0].quality;
    assert_eq!(quality.manufacturer.score, 1.0);
    assert_eq!(quality.datasheet.score, 1.0);
    assert_eq!(quality.cost.score, 1.0);
    assert!(quality.overall_score >= 0.7);
}

#[test]
fn analyze_dir_extracts_markdown_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_file(
        dir.path(),
        "docs/assembly.md",
        "# Assembly\n\nBill of materials:\n\n\
         | Reference | Value | MPN |\n\
         |-----------|-------|-----|\n\
         | R1        | 10k   | RC0805FR-0710KL |\n",
    );

    let report = RepoAnalyzer::new()
        .analyze_dir(dir.path())
        .expect("analyze");
    assert_eq!(report.boms.len(), 1);
    assert_eq!(report.boms[0].format, "markdown");
    assert_eq!(report.boms[0].quality.part_number.score, 1.0);
}

#[test]
fn analyze_dir_skips_hidden_entries() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_file(dir.path(), ".git/bom.csv", SPARSE_BOM);
    write_file(dir.path(), ".hidden-bom.csv", SPARSE_BOM);
    write_file(dir.path(), "bom.csv", SPARSE_BOM);

    let report = RepoAnalyzer::new()
        .analyze_dir(dir.path())
        .expect("analyze");
    assert_eq!(report.boms.len(), 1);
    assert_eq!(report.boms[0].path, "bom.csv");
}

#[test]
fn analyze_dir_tolerates_binary_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::create_dir_all(dir.path().join("hardware")).expect("create dirs");
    fs::write(dir.path().join("hardware/render.png"), [0x89, 0x50, 0x4e, 0x47])
        .expect("write binary");
    fs::write(dir.path().join("hardware/junk.csv"), [0xff, 0xfe, 0x00, 0x01])
        .expect("write binary");
    write_file(dir.path(), "hardware/bom.csv", SPARSE_BOM);

    let report = RepoAnalyzer::new()
        .analyze_dir(dir.path())
        .expect("analyze");
    // The png is rejected outright; the undecodable csv detects by
    // directory but yields no table.
    assert_eq!(report.boms.len(), 1);
    assert_eq!(report.boms[0].path, "hardware/bom.csv");
}

#[test]
fn analyze_dir_missing_root_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nope");
    assert!(RepoAnalyzer::new().analyze_dir(&missing).is_err());
}

#[test]
fn analyze_batch_preserves_input_order() {
    let rich = tempfile::tempdir().expect("create temp dir");
    write_file(rich.path(), "bom.csv", RICH_BOM);
    let sparse = tempfile::tempdir().expect("create temp dir");
    write_file(sparse.path(), "bom.csv", SPARSE_BOM);
    let missing = rich.path().join("nope");

    let analyzer = RepoAnalyzer::new();
    let results = analyzer.analyze_batch(&[sparse.path(), missing.as_path(), rich.path()]);
    assert_eq!(results.len(), 3);

    let first = results[0].as_ref().expect("sparse tree");
    let third = results[2].as_ref().expect("rich tree");
    assert!(results[1].is_err());
    assert!(third.overall_score > first.overall_score);
}

#[test]
fn repo_overall_score_is_mean_of_boms() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_file(dir.path(), "bom/full.csv", RICH_BOM);
    write_file(dir.path(), "bom/sparse.csv", SPARSE_BOM);

    let report = RepoAnalyzer::new()
        .analyze_dir(dir.path())
        .expect("analyze");
    assert_eq!(report.boms.len(), 2);
    let mean: f32 = report
        .boms
        .iter()
        .map(|b| b.quality.overall_score)
        .sum::<f32>()
        / 2.0;
    assert!((report.overall_score - mean).abs() < 1e-6);
}
