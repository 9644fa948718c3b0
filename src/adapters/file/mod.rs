//! File-based roster source
//!
//! Implements `RosterSource` by reading a participant file and an optional
//! exclusion file from disk.

mod roster;

pub use roster::{FileRoster, read_to_string};
