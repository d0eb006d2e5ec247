//! Integration tests for CLI input loading, dispatch and rendering.

use std::io::Write;

use matrix_algebra::config::{AlgebraConfig, DeterminantStrategy, PowerStrategy};
use matrix_algebra::Matrix;
use matrix_cli::commands::{
    load_config, load_matrix, parse_coefficients, run, Operation, Outcome,
};

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_block(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn load_matrix_from_json_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "a.json", "[[1, 2], [3, 4]]");
    let a = load_matrix(&path).unwrap();
    assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
}

#[test]
fn load_matrix_reports_ragged_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "bad.json", "[[1, 2], [3]]");
    let err = load_matrix(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse matrix"));
}

#[test]
fn load_matrix_missing_file_errors() {
    assert!(load_matrix("/nonexistent/path/a.json").is_err());
}

#[test]
fn load_config_with_partial_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "cfg.json", r#"{"power": "squaring"}"#);
    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.power, PowerStrategy::Squaring);
    assert_eq!(cfg.determinant, DeterminantStrategy::Cofactor);
}

#[test]
fn coefficients_parse_with_spaces_and_negatives() {
    assert_eq!(parse_coefficients("1, 0,-2.5").unwrap(), vec![1.0, 0.0, -2.5]);
    assert!(parse_coefficients("1,x").is_err());
}

#[test]
fn coefficients_reject_empty_tokens() {
    let err = parse_coefficients("1,,2").unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid coefficient"));
    assert!(parse_coefficients("").is_err());
    assert!(parse_coefficients("1,2,").is_err());
}

// ---------------------------------------------------------------------------
// Dispatch and rendering
// ---------------------------------------------------------------------------

#[test]
fn run_determinant_renders_scalar() {
    let op = Operation::Determinant(m(&[&[1.0, 2.0], &[3.0, 4.0]]));
    let outcome = run(&op, &AlgebraConfig::default()).unwrap();
    assert_eq!(outcome, Outcome::Scalar(-2.0));
    assert_eq!(outcome.render(false).unwrap(), "-2\n");
    assert_eq!(outcome.render(true).unwrap(), "-2.0\n");
}

#[test]
fn run_mul_renders_display_format() {
    let op = Operation::Mul(m(&[&[1.0, 2.0]]), m(&[&[3.0], &[4.0]]));
    let outcome = run(&op, &AlgebraConfig::default()).unwrap();
    assert_eq!(outcome.render(false).unwrap(), "11\n");
}

#[test]
fn run_power_renders_json() {
    let op = Operation::Power {
        matrix: m(&[&[1.0, 1.0], &[1.0, 0.0]]),
        exponent: 5,
    };
    let outcome = run(&op, &AlgebraConfig::default()).unwrap();
    assert_eq!(outcome.render(true).unwrap(), "[[8.0,5.0],[5.0,3.0]]\n");
}

#[test]
fn run_reports_shape_errors_with_context() {
    let op = Operation::Add(
        Matrix::zeros_with_shape(2, 3).unwrap(),
        Matrix::zeros_with_shape(3, 2).unwrap(),
    );
    let err = run(&op, &AlgebraConfig::default()).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Addition failed"));
    assert!(msg.contains("2x3"));
}
