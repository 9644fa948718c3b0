//! Roster model
//!
//! Everything loaded for one draw: who takes part and which pairings are
//! forbidden. Built once at startup and never mutated afterwards.

use super::{ExclusionSet, Participant};

/// Participants plus exclusions for a single draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Participants in file order (duplicates kept)
    pub participants: Vec<Participant>,
    /// Forbidden pairings
    pub exclusions: ExclusionSet,
}

impl Roster {
    /// Create a roster
    #[must_use]
    pub const fn new(participants: Vec<Participant>, exclusions: ExclusionSet) -> Self {
        Self {
            participants,
            exclusions,
        }
    }
}
