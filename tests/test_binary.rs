//! End-to-end tests running the compiled `doubler` binary

mod common;

use assert_cmd::Command;
use common::create_temp_input;
use predicates::prelude::*;

fn doubler() -> Command {
    Command::cargo_bin("doubler").unwrap()
}

#[test]
fn test_doubles_value_end_to_end() {
    let (_dir, input, output) = create_temp_input("x: 21\n");

    doubler()
        .arg("double")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("x: 21 → 42"));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "x: 42\n");
}

#[test]
fn test_quiet_prints_nothing() {
    let (_dir, input, output) = create_temp_input("x: 1.5\n");

    doubler()
        .args(["--quiet", "double", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "x: 3.0\n");
}

#[test]
fn test_missing_input_fails() {
    let (dir, _input, output) = create_temp_input("x: 1\n");

    doubler()
        .arg("double")
        .arg("-i")
        .arg(dir.path().join("absent.yaml"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));

    assert!(!output.exists());
}

#[test]
fn test_invalid_yaml_fails() {
    let (_dir, input, output) = create_temp_input("x: [unclosed\n");

    doubler()
        .arg("double")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid YAML"));
}

#[test]
fn test_missing_key_fails() {
    let (_dir, input, output) = create_temp_input("y: 1\n");

    doubler()
        .arg("double")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("key 'x' not found"));

    assert!(!output.exists());
}

#[test]
fn test_non_numeric_fails() {
    let (_dir, input, output) = create_temp_input("x: hello\n");

    doubler()
        .arg("double")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a number, found a string"));

    assert!(!output.exists());
}

#[test]
fn test_missing_output_directory_fails() {
    let (dir, input, _output) = create_temp_input("x: 1\n");

    doubler()
        .arg("double")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("missing").join("out.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write output file"));
}

#[test]
fn test_usage_error_exits_with_code_two() {
    doubler()
        .args(["double", "--input", "in.yaml"])
        .assert()
        .failure()
        .code(2);
}
