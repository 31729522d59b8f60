//! Reading and writing YAML record files

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use super::error::DoubleError;
use super::record::{Number, Record};

/// Values seen by one doubling run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleOutcome {
    pub original: Number,
    pub doubled: Number,
}

/// Load a record from a YAML file.
///
/// The whole file is read before parsing, so the handle is closed whether
/// or not the contents turn out to be valid.
pub fn read_record(path: &Path) -> Result<Record, DoubleError> {
    let contents = fs::read_to_string(path).map_err(|source| DoubleError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    // libyaml sees no document at all in blank input
    if contents.trim().is_empty() {
        return Err(DoubleError::NotAMapping {
            found: "an empty document",
        });
    }

    let value: Value = serde_yaml::from_str(&contents).map_err(|source| DoubleError::ParseInput {
        path: path.to_path_buf(),
        source,
    })?;

    Record::from_value(&value)
}

/// Write a record to a YAML file, creating it or truncating what is there.
pub fn write_record(path: &Path, record: &Record) -> Result<(), DoubleError> {
    let yaml = record.to_yaml_string()?;
    fs::write(path, yaml).map_err(|source| DoubleError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `input`, double its `x`, and write `{x: doubled}` to `output`.
///
/// `output` is only opened once the new value is known, so a failed load,
/// schema check, or overflow leaves it untouched.
pub fn double_file(input: &Path, output: &Path) -> Result<DoubleOutcome, DoubleError> {
    let mut record = read_record(input)?;
    let original = record.x;
    record.double()?;
    write_record(output, &record)?;

    Ok(DoubleOutcome {
        original,
        doubled: record.x,
    })
}
