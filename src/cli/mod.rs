//! CLI module - argument parsing and command handlers

mod args;
pub mod double;

pub use args::{Cli, Commands};
pub use double::run_double;
