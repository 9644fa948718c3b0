//! Domain models for secret-santa
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Participant`] - A normalized name
//! - [`Exclusion`] - "This giver must not draw this receiver"
//! - [`Assignment`] - The ordered giver -> receiver result
//! - [`Roster`] - Participants and exclusions loaded for one draw

mod assignment;
mod exclusion;
mod participant;
mod roster;

pub use assignment::{Assignment, Pair};
pub use exclusion::{Exclusion, ExclusionSet};
pub use participant::{Participant, normalize};
pub use roster::Roster;
