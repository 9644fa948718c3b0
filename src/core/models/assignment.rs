//! Assignment model
//!
//! The result of a successful draw: each giver mapped to one receiver,
//! kept in the order givers were first inserted.

use std::collections::HashMap;

use super::Participant;

/// One giver -> receiver pairing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// Who gives
    pub giver: Participant,
    /// Who receives
    pub receiver: Participant,
}

/// Ordered giver -> receiver mapping with unique givers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pairs: Vec<Pair>,
    index: HashMap<Participant, usize>,
}

impl Assignment {
    /// Create an empty assignment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty assignment sized for `capacity` givers
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Record `giver -> receiver`
    ///
    /// A giver that is already present keeps its position and takes the
    /// new receiver.
    pub fn insert(&mut self, giver: Participant, receiver: Participant) {
        if let Some(&slot) = self.index.get(&giver) {
            self.pairs[slot].receiver = receiver;
        } else {
            self.index.insert(giver.clone(), self.pairs.len());
            self.pairs.push(Pair { giver, receiver });
        }
    }

    /// Receiver drawn by `giver`, if any
    #[must_use]
    pub fn receiver_for(&self, giver: &Participant) -> Option<&Participant> {
        self.index.get(giver).map(|&slot| &self.pairs[slot].receiver)
    }

    /// Pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// Number of givers
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
