//! The `double` command

use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::{double_file, KEY};
use crate::utils::print_doubled;

/// Run the `double` command
///
/// # Arguments
/// * `input` - YAML file holding a mapping with a numeric `x`
/// * `output` - File that receives `{x: <doubled>}`
/// * `quiet` - Skip the summary line on success
pub fn run_double(input: &Path, output: &Path, quiet: bool) -> Result<()> {
    let outcome = double_file(input, output).with_context(|| {
        format!(
            "Failed to double '{}' from {}",
            KEY,
            input.display()
        )
    })?;

    if !quiet {
        print_doubled(KEY, &outcome.original, &outcome.doubled, output);
    }

    Ok(())
}
