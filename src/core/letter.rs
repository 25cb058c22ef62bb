//! A single positioned letter carrying its feedback status

use super::LetterStatus;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One letter of a [`Word`](super::Word)
///
/// Identity is `(character, position)`; the status is excluded from equality
/// and hashing because it mutates as feedback accumulates.
#[derive(Debug, Clone, Copy)]
pub struct Letter {
    character: char,
    position: usize,
    status: LetterStatus,
}

impl Letter {
    pub(crate) const fn new(character: char, position: usize) -> Self {
        Self {
            character,
            position,
            status: LetterStatus::Unknown,
        }
    }

    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    /// Zero-based index inside the owning word
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> LetterStatus {
        self.status
    }

    /// Upgrade the status if `candidate` wins under the merge rule
    ///
    /// Returns `true` when the status changed.
    pub(crate) fn update_status(&mut self, candidate: LetterStatus) -> bool {
        if self.status.should_update_to(candidate) && self.status != candidate {
            self.status = candidate;
            true
        } else {
            false
        }
    }

    pub(crate) fn reset_status(&mut self) {
        self.status = LetterStatus::Unknown;
    }
}

impl PartialEq for Letter {
    fn eq(&self, other: &Self) -> bool {
        self.character == other.character && self.position == other.position
    }
}

impl Eq for Letter {}

impl Hash for Letter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.character.hash(state);
        self.position.hash(state);
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.character, self.status)
    }
}
