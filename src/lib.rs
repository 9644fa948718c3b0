//! secret-santa - Draw gift-exchange pairs from a participant list
//!
//! This library loads participants and forbidden pairings, then draws a
//! random giver -> receiver assignment where nobody gets themselves or an
//! excluded receiver.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;

pub use crate::core::models::{Assignment, Exclusion, ExclusionSet, Pair, Participant, Roster};
pub use crate::core::ports::RosterSource;
pub use crate::core::services::{Assigner, DEFAULT_MAX_ATTEMPTS, Draw};
pub use error::{Result, SantaError};
