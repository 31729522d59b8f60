//! Doubler: YAML Value Doubling CLI Tool
//!
//! A command-line tool that reads `x` from a YAML mapping, doubles it,
//! and writes the result to another YAML file.

use anyhow::Result;
use clap::Parser;

use doubler::cli::{run_double, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Double { input, output } => run_double(input, output, cli.quiet),
    }
}
