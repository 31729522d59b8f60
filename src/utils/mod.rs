//! Terminal output helpers

mod styling;

pub use styling::{print_doubled, print_success};
