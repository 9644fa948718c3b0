//! Roster source port
//!
//! Defines the interface for loading participants and exclusions.

use crate::core::models::{ExclusionSet, Participant, Roster};
use crate::error::Result;

/// Source of the participants and exclusions for a draw
///
/// Implementations handle where the data lives (files, memory, etc.)
/// and hand back already-normalized models.
pub trait RosterSource {
    /// Load the participant list in source order
    fn participants(&self) -> Result<Vec<Participant>>;

    /// Load the exclusions; sources without any return an empty set
    fn exclusions(&self) -> Result<ExclusionSet>;

    /// Load both halves into a [`Roster`]
    fn load(&self) -> Result<Roster> {
        let participants = self.participants()?;
        let exclusions = self.exclusions()?;
        Ok(Roster::new(participants, exclusions))
    }
}
