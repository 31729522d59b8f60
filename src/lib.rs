//! Doubler: YAML Value Doubling Library
//!
//! Reads the numeric `x` value of a YAML mapping, doubles it, and writes
//! `{x: <doubled>}` to another YAML file.

pub mod cli;
pub mod pipeline;
pub mod utils;
