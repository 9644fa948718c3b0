//! Port traits for external dependencies
//!
//! The core never touches the filesystem directly. Where participants and
//! exclusions come from is abstracted behind [`RosterSource`].

mod roster_source;

pub use roster_source::RosterSource;
