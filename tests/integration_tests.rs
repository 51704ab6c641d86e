use roman_words::{CalcEngine, CalcError, LocalStorage, RomanPipeline, RunConfig};
use std::path::Path;
use tempfile::TempDir;

fn engine_in(dir: &Path) -> CalcEngine<RomanPipeline<LocalStorage, RunConfig>> {
    let storage = LocalStorage::new(dir);
    CalcEngine::new(RomanPipeline::new(storage, RunConfig::default()))
}

fn read_output(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("Output.txt")).unwrap()
}

#[tokio::test]
async fn test_end_to_end_with_default_paths() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("input.txt"),
        "IV + VI\nMCMXCIV - IV\nX * X\nC / III\nV - X\n",
    )
    .unwrap();

    let outcome = engine_in(temp_dir.path()).run().await.unwrap();

    assert_eq!(outcome.output_path, "Output.txt");
    assert_eq!(
        read_output(temp_dir.path()),
        "Ten\n\
         One Thousand Nine Hundred Ninety\n\
         One Hundred\n\
         Thirty Three\n\
         Negative Five\n"
    );
}

#[tokio::test]
async fn test_diagnostics_keep_line_order() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("input.txt"),
        "IV + VI\n\nIV + 4\nX Y Z W\nIV $ VI\nX / N\nii * iii\n",
    )
    .unwrap();

    let outcome = engine_in(temp_dir.path()).run().await.unwrap();

    assert_eq!(
        read_output(temp_dir.path()),
        "Ten\n\
         Invalid input format detected.\n\
         Invalid Roman numeral detected.\n\
         Invalid input format detected.\n\
         Zero\n\
         Invalid Roman numeral detected.\n\
         Six\n"
    );

    let summary = outcome.report.summary();
    assert_eq!(summary.lines, 7);
    assert_eq!(summary.results, 3);
    assert_eq!(summary.invalid_numerals, 2);
    assert_eq!(summary.invalid_formats, 2);
}

#[tokio::test]
async fn test_unsupported_operator_spells_zero() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input.txt"), "IV $ VI\n").unwrap();

    engine_in(temp_dir.path()).run().await.unwrap();

    assert_eq!(read_output(temp_dir.path()), "Zero\n");
}

#[tokio::test]
async fn test_zero_results_spell_zero() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input.txt"), "X - X\nI / X\n").unwrap();

    engine_in(temp_dir.path()).run().await.unwrap();

    assert_eq!(read_output(temp_dir.path()), "Zero\nZero\n");
}

#[tokio::test]
async fn test_missing_input_writes_empty_output() {
    let temp_dir = TempDir::new().unwrap();

    let outcome = engine_in(temp_dir.path()).run().await.unwrap();

    assert!(outcome.report.outcomes.is_empty());
    assert_eq!(read_output(temp_dir.path()), "");
}

#[tokio::test]
async fn test_output_line_count_matches_input() {
    let temp_dir = TempDir::new().unwrap();
    let input: String = (1..=50)
        .map(|i| if i % 3 == 0 { "bad line\n" } else { "XX * L\n" })
        .collect();
    std::fs::write(temp_dir.path().join("input.txt"), &input).unwrap();

    engine_in(temp_dir.path()).run().await.unwrap();

    let output = read_output(temp_dir.path());
    assert_eq!(output.lines().count(), input.lines().count());
    assert_eq!(output.lines().next(), Some("One Thousand"));
}

#[tokio::test]
async fn test_unwritable_output_is_reported_but_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input.txt"), "I + I\n").unwrap();

    let config = RunConfig::merge(
        None,
        Some("no/such/dir/Output.txt".to_string()),
        Default::default(),
    );
    let storage = LocalStorage::new(temp_dir.path());
    let engine = CalcEngine::new(RomanPipeline::new(storage, config));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, CalcError::OutputError { .. }));
    assert_eq!(err.exit_code(), 0);
    assert!(!temp_dir.path().join("no/such/dir/Output.txt").exists());
}

#[tokio::test]
async fn test_evaluate_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input.txt"), "M + M\n").unwrap();

    let report = engine_in(temp_dir.path()).evaluate().await.unwrap();

    assert_eq!(report.render(), "Two Thousand\n");
    assert!(!temp_dir.path().join("Output.txt").exists());
}
