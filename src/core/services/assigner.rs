//! Assigner service - draws giver -> receiver pairs
//!
//! Rejection sampling over random permutations: shuffle the receivers,
//! walk the givers in order, and throw the whole attempt away at the first
//! self-pairing or excluded pairing. Attempts are capped, so dense
//! exclusion sets can fail even when a valid draw exists.

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::models::{Assignment, ExclusionSet, Participant, Roster};
use crate::error::{Result, SantaError};

/// Attempt budget used when none is configured
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// A successful draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// The pairs, in original participant order
    pub assignment: Assignment,
    /// Which attempt produced them (1-based)
    pub attempts: u32,
}

/// Randomized-retry pair assigner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assigner {
    max_attempts: u32,
}

impl Default for Assigner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl Assigner {
    /// Create an assigner with the given attempt budget
    #[must_use]
    pub const fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// The attempt budget
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draw pairs for a loaded roster
    ///
    /// # Errors
    ///
    /// See [`Assigner::assign`].
    pub fn draw<R: Rng + ?Sized>(&self, roster: &Roster, rng: &mut R) -> Result<Draw> {
        self.assign(&roster.participants, &roster.exclusions, rng)
    }

    /// Draw pairs so nobody gets themselves or an excluded receiver
    ///
    /// `rng` is the only source of randomness, so a seeded generator makes
    /// the draw reproducible.
    ///
    /// # Errors
    ///
    /// - [`SantaError::InsufficientParticipants`] with fewer than two
    ///   participants
    /// - [`SantaError::AssignmentExhausted`] when every attempt hit a
    ///   conflict
    pub fn assign<R: Rng + ?Sized>(
        &self,
        participants: &[Participant],
        exclusions: &ExclusionSet,
        rng: &mut R,
    ) -> Result<Draw> {
        if participants.len() < 2 {
            return Err(SantaError::InsufficientParticipants {
                count: participants.len(),
            });
        }

        let mut receivers = participants.to_vec();
        for attempt in 1..=self.max_attempts {
            receivers.clone_from_slice(participants);
            receivers.shuffle(rng);

            if let Some(assignment) = walk(participants, &receivers, exclusions) {
                debug!("Found a valid draw on attempt {attempt}/{}", self.max_attempts);
                return Ok(Draw {
                    assignment,
                    attempts: attempt,
                });
            }
            trace!("Attempt {attempt} hit a conflict, reshuffling");
        }

        debug!("No valid draw after {} attempt(s)", self.max_attempts);
        Err(SantaError::AssignmentExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Pair givers with receivers position by position
///
/// Returns `None` at the first self-pairing or excluded pairing; the
/// partial assignment is dropped.
fn walk(
    givers: &[Participant],
    receivers: &[Participant],
    exclusions: &ExclusionSet,
) -> Option<Assignment> {
    let mut assignment = Assignment::with_capacity(givers.len());
    for (giver, receiver) in givers.iter().zip(receivers) {
        if giver == receiver || exclusions.contains(giver, receiver) {
            return None;
        }
        assignment.insert(giver.clone(), receiver.clone());
    }
    Some(assignment)
}
