//! Letter feedback status and the monotonic merge rule
//!
//! Statuses are totally ordered by display priority:
//! `Unknown < NotInWord < IncorrectPosition < CorrectPosition`.
//! The same order drives per-letter updates and keyboard-wide aggregation.

use serde::Serialize;
use std::fmt;

/// Feedback classification for a single letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterStatus {
    /// Not guessed yet
    #[default]
    Unknown,
    /// Letter does not appear in the target (gray)
    NotInWord,
    /// Letter appears in the target at another position (yellow)
    IncorrectPosition,
    /// Letter is at the right position (green)
    CorrectPosition,
}

impl LetterStatus {
    /// All statuses, lowest priority first
    pub const ALL: [Self; 4] = [
        Self::Unknown,
        Self::NotInWord,
        Self::IncorrectPosition,
        Self::CorrectPosition,
    ];

    /// Whether `candidate` should replace `self`
    ///
    /// Upgrades only: `CorrectPosition` is absorbing, `IncorrectPosition` only
    /// accepts `CorrectPosition`, `NotInWord` accepts either of the two higher
    /// statuses, and `Unknown` accepts anything.
    ///
    /// # Examples
    /// ```
    /// use polywordic::core::LetterStatus;
    ///
    /// assert!(LetterStatus::NotInWord.should_update_to(LetterStatus::IncorrectPosition));
    /// assert!(!LetterStatus::CorrectPosition.should_update_to(LetterStatus::NotInWord));
    /// ```
    #[inline]
    #[must_use]
    pub const fn should_update_to(self, candidate: Self) -> bool {
        match self {
            Self::CorrectPosition => false,
            Self::IncorrectPosition => matches!(candidate, Self::CorrectPosition),
            Self::NotInWord => matches!(
                candidate,
                Self::IncorrectPosition | Self::CorrectPosition
            ),
            Self::Unknown => true,
        }
    }

    /// Apply the merge rule and return the surviving status
    #[inline]
    #[must_use]
    pub const fn merge(self, candidate: Self) -> Self {
        if self.should_update_to(candidate) {
            candidate
        } else {
            self
        }
    }

    /// Wire name used at the API boundary
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::NotInWord => "NOT_IN_WORD",
            Self::IncorrectPosition => "INCORRECT_POSITION",
            Self::CorrectPosition => "CORRECT_POSITION",
        }
    }

    /// Tile glyph for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::CorrectPosition => '🟩',
            Self::IncorrectPosition => '🟨',
            Self::NotInWord => '⬛',
            Self::Unknown => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_ordered_by_priority() {
        assert!(LetterStatus::Unknown < LetterStatus::NotInWord);
        assert!(LetterStatus::NotInWord < LetterStatus::IncorrectPosition);
        assert!(LetterStatus::IncorrectPosition < LetterStatus::CorrectPosition);
        assert_eq!(LetterStatus::default(), LetterStatus::Unknown);
    }

    #[test]
    fn correct_position_is_absorbing() {
        for candidate in LetterStatus::ALL {
            assert!(!LetterStatus::CorrectPosition.should_update_to(candidate));
            assert_eq!(
                LetterStatus::CorrectPosition.merge(candidate),
                LetterStatus::CorrectPosition
            );
        }
    }

    #[test]
    fn incorrect_position_only_upgrades_to_correct() {
        let current = LetterStatus::IncorrectPosition;
        assert!(current.should_update_to(LetterStatus::CorrectPosition));
        assert!(!current.should_update_to(LetterStatus::IncorrectPosition));
        assert!(!current.should_update_to(LetterStatus::NotInWord));
        assert!(!current.should_update_to(LetterStatus::Unknown));
    }

    #[test]
    fn not_in_word_upgrades_to_either_present_status() {
        let current = LetterStatus::NotInWord;
        assert!(current.should_update_to(LetterStatus::CorrectPosition));
        assert!(current.should_update_to(LetterStatus::IncorrectPosition));
        assert!(!current.should_update_to(LetterStatus::NotInWord));
        assert!(!current.should_update_to(LetterStatus::Unknown));
    }

    #[test]
    fn unknown_accepts_everything() {
        for candidate in LetterStatus::ALL {
            assert!(LetterStatus::Unknown.should_update_to(candidate));
            assert_eq!(LetterStatus::Unknown.merge(candidate), candidate);
        }
    }

    #[test]
    fn merge_keeps_the_higher_priority() {
        for current in LetterStatus::ALL {
            for candidate in LetterStatus::ALL {
                assert_eq!(current.merge(candidate), current.max(candidate));
            }
        }
    }

    #[test]
    fn merge_is_idempotent() {
        for current in LetterStatus::ALL {
            for candidate in LetterStatus::ALL {
                let once = current.merge(candidate);
                assert_eq!(once.merge(candidate), once);
            }
        }
    }

    #[test]
    fn wire_names() {
        assert_eq!(LetterStatus::NotInWord.to_string(), "NOT_IN_WORD");
        assert_eq!(
            serde_json::to_string(&LetterStatus::CorrectPosition).unwrap(),
            "\"CORRECT_POSITION\""
        );
    }
}
