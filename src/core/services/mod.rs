//! Business logic services
//!
//! Pure logic that operates on domain models. Randomness is passed in by
//! the caller; nothing here does I/O.
//!
//! - [`assigner`] - Draw giver -> receiver pairs

pub mod assigner;

pub use assigner::{Assigner, DEFAULT_MAX_ATTEMPTS, Draw};
