//! CLI binary smoke tests using assert_cmd.
//!
//! These tests run the compiled `matrix-cli` binary to check argument
//! parsing, strategy overrides, global flags and error reporting end-to-end.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("matrix-cli").unwrap()
}

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("det"))
        .stdout(predicate::str::contains("poly"));
}

#[test]
fn missing_matrix_file_errors() {
    cmd()
        .args(["transpose", "/nonexistent/a.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read matrix"));
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[test]
fn det_with_elimination_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.json", "[[1, 2], [3, 4]]");
    cmd()
        .arg("det")
        .arg(&a)
        .args(["-s", "elimination"])
        .assert()
        .success()
        .stdout("-2\n");
}

#[test]
fn det_rejects_unknown_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.json", "[[1, 2], [3, 4]]");
    cmd()
        .arg("det")
        .arg(&a)
        .args(["-s", "lu"])
        .assert()
        .failure();
}

#[test]
fn power_negative_exponent_errors() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.json", "[[1, 1], [1, 0]]");
    cmd()
        .arg("power")
        .arg(&a)
        .args(["-n", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exponent must be non-negative"));
}

#[test]
fn power_with_squaring_prints_display_format() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.json", "[[1, 1], [1, 0]]");
    cmd()
        .arg("power")
        .arg(&a)
        .args(["-n", "5", "--strategy", "squaring"])
        .assert()
        .success()
        .stdout("8 5\n5 3\n");
}

#[test]
fn mul_with_json_flag_prints_nested_rows() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.json", "[[1, 2]]");
    let b = write_file(&dir, "b.json", "[[3], [4]]");
    cmd()
        .arg("--json")
        .arg("mul")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("[[11.0]]\n");
}

#[test]
fn add_shape_mismatch_errors() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.json", "[[1, 2, 3], [4, 5, 6]]");
    let b = write_file(&dir, "b.json", "[[1, 2], [3, 4], [5, 6]]");
    cmd()
        .arg("add")
        .arg(&a)
        .arg(&b)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Addition failed"));
}

#[test]
fn poly_evaluates_coefficients() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.json", "[[1, 2], [3, 4]]");
    cmd()
        .arg("poly")
        .arg(&a)
        .args(["-k", "-2,-5,1", "-s", "horner"])
        .assert()
        .success()
        .stdout("0 0\n0 0\n");
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_file_selects_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.json", "[[0, 1, 2], [1, 0, 3], [4, -3, 8]]");
    let cfg = write_file(&dir, "cfg.json", r#"{"determinant": "elimination"}"#);
    cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("det")
        .arg(&a)
        .assert()
        .success()
        .stdout("-2\n");
}

#[test]
fn bad_config_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.json", "[[1, 2], [3, 4]]");
    let cfg = write_file(&dir, "cfg.json", r#"{"determinant": "lu"}"#);
    cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("det")
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
