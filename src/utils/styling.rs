//! Terminal styling utilities for status output

use console::style;
use std::path::Path;

use crate::pipeline::Number;

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), style(message).green());
}

/// Print the result of a doubling run, e.g. `✓ x: 21 → 42  (out.yaml)`
pub fn print_doubled(key: &str, original: &Number, doubled: &Number, output: &Path) {
    print_success(&format!("{}: {} → {}", key, original, doubled));
    println!("  {}", style(truncate_path(output, 60)).dim());
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}
