//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory holding `in.yaml` with the given contents.
///
/// Returns the directory guard, the input path, and an `out.yaml` path in the
/// same directory that does not exist yet.
pub fn create_temp_input(contents: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.yaml");
    let output = temp_dir.path().join("out.yaml");
    std::fs::write(&input, contents).unwrap();
    (temp_dir, input, output)
}

/// Parse a YAML file into a generic mapping
pub fn read_mapping(path: &std::path::Path) -> serde_yaml::Mapping {
    let contents = std::fs::read_to_string(path).unwrap();
    match serde_yaml::from_str(&contents).unwrap() {
        serde_yaml::Value::Mapping(m) => m,
        other => panic!("expected a mapping, got {:?}", other),
    }
}
