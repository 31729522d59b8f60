//! Error types for the doubling pipeline.
//!
//! Each variant captures one failure mode of a single invocation: reading the
//! input file, parsing it, checking its shape, doubling the value, and writing
//! the result.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while doubling a YAML record.
#[derive(Debug, Error)]
pub enum DoubleError {
    /// Input file is missing or unreadable.
    #[error("failed to read input file {}", .path.display())]
    ReadInput {
        /// Path that was being read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid YAML.
    #[error("input file {} is not valid YAML", .path.display())]
    ParseInput {
        /// Path that was being parsed
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Document parsed, but its top level is not a mapping.
    #[error("expected a mapping at the top level, found {found}")]
    NotAMapping {
        /// Kind of YAML node found instead
        found: &'static str,
    },

    /// The mapping has no entry for the requested key.
    #[error("key '{key}' not found in input mapping")]
    MissingKey { key: String },

    /// The value under the key cannot be multiplied.
    #[error("cannot double '{key}': expected a number, found {found}")]
    NotNumeric {
        key: String,
        /// Kind of YAML node found instead
        found: &'static str,
    },

    /// Doubling an integer does not fit in 64 bits.
    #[error("doubling {value} overflows a 128-bit integer")]
    IntegerOverflow { value: String },

    /// The output mapping could not be rendered as YAML.
    #[error("failed to serialize output")]
    Serialize(#[source] serde_yaml::Error),

    /// Output file could not be created or written.
    #[error("failed to write output file {}", .path.display())]
    WriteOutput {
        /// Path that was being written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
