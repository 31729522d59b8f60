//! Doubling pipeline: load, check, double, write

pub mod error;
pub mod loader;
pub mod record;

pub use error::DoubleError;
pub use loader::{double_file, read_record, write_record, DoubleOutcome};
pub use record::{Number, Record, KEY};
