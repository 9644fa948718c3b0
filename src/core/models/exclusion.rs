//! Exclusion model
//!
//! An exclusion forbids one ordered pairing: the giver must never draw
//! that receiver. The reverse direction is a separate exclusion.

use std::collections::HashSet;

use super::Participant;

/// A forbidden (giver, receiver) pairing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Exclusion {
    /// Who must not give
    pub giver: Participant,
    /// Who they must not give to
    pub receiver: Participant,
}

impl Exclusion {
    /// Create an exclusion from raw names
    #[must_use]
    pub fn new(giver: &str, receiver: &str) -> Self {
        Self {
            giver: Participant::new(giver),
            receiver: Participant::new(receiver),
        }
    }
}

/// Set of exclusions with membership lookup by pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    pairs: HashSet<Exclusion>,
}

impl ExclusionSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclusion, returning `false` if it was already present
    pub fn insert(&mut self, exclusion: Exclusion) -> bool {
        self.pairs.insert(exclusion)
    }

    /// Whether `giver` is forbidden from drawing `receiver`
    #[must_use]
    pub fn contains(&self, giver: &Participant, receiver: &Participant) -> bool {
        self.pairs.contains(&Exclusion {
            giver: giver.clone(),
            receiver: receiver.clone(),
        })
    }

    /// Number of distinct exclusions
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<Exclusion> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = Exclusion>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
