//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Doubler - Double the `x` value of a YAML mapping
#[derive(Parser, Debug)]
#[command(name = "doubler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress the summary line printed on success
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read `x` from a YAML file, double it, and write `{x: <doubled>}` to another file
    Double {
        /// Input YAML file; its top level must be a mapping with a numeric `x`
        #[arg(short, long)]
        input: PathBuf,

        /// Output YAML file (created if absent, overwritten if present)
        #[arg(short, long)]
        output: PathBuf,
    },
}
