//! Aggregate letter status across a whole session
//!
//! Drives the persistent keyboard hints: each alphabet letter shows the best
//! status it has ever received in any guess.

use crate::core::{LetterStatus, Word};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

const ALPHABET_LEN: usize = 26;

/// QWERTY rows, used by the terminal front ends
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-seen status for every letter `A..=Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardStatus {
    statuses: [LetterStatus; ALPHABET_LEN],
}

impl Default for KeyboardStatus {
    fn default() -> Self {
        Self {
            statuses: [LetterStatus::Unknown; ALPHABET_LEN],
        }
    }
}

fn index_of(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}

impl KeyboardStatus {
    /// Recompute from the full guess history, in guess order
    #[must_use]
    pub fn from_guesses(guesses: &[Word]) -> Self {
        let mut keyboard = Self::default();
        for guess in guesses {
            keyboard.record(guess);
        }
        keyboard
    }

    /// Merge every letter of one evaluated guess
    pub fn record(&mut self, guess: &Word) {
        for letter in guess.letters() {
            if let Some(idx) = index_of(letter.character()) {
                self.statuses[idx] = self.statuses[idx].merge(letter.status());
            }
        }
    }

    /// Status for `letter`, case-insensitive; non-letters are always `Unknown`
    #[must_use]
    pub fn get(&self, letter: char) -> LetterStatus {
        index_of(letter).map_or(LetterStatus::Unknown, |idx| self.statuses[idx])
    }

    /// `(letter, status)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'A'..=b'Z')
            .map(char::from)
            .zip(self.statuses.iter().copied())
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<char, LetterStatus> {
        self.iter().collect()
    }

    /// Letters currently holding `status`
    #[must_use]
    pub fn letters_with(&self, status: LetterStatus) -> Vec<char> {
        self.iter()
            .filter(|&(_, s)| s == status)
            .map(|(c, _)| c)
            .collect()
    }
}

impl Serialize for KeyboardStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALPHABET_LEN))?;
        for (letter, status) in self.iter() {
            map.serialize_entry(&letter, &status)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated(target: &str, guess: &str) -> Word {
        let target = Word::new(target).unwrap();
        let mut guess = Word::new(guess).unwrap();
        target.evaluate(&mut guess).unwrap();
        guess
    }

    #[test]
    fn empty_history_is_all_unknown() {
        let keyboard = KeyboardStatus::from_guesses(&[]);
        assert_eq!(keyboard.to_map().len(), 26);
        assert!(keyboard.iter().all(|(_, s)| s == LetterStatus::Unknown));
    }

    #[test]
    fn best_status_wins_across_guesses() {
        // E is misplaced in the first guess and exact in the second
        let guesses = vec![evaluated("slate", "tepid"), evaluated("slate", "crane")];
        let keyboard = KeyboardStatus::from_guesses(&guesses);

        assert_eq!(keyboard.get('E'), LetterStatus::CorrectPosition);
        assert_eq!(keyboard.get('a'), LetterStatus::CorrectPosition);
        assert_eq!(keyboard.get('R'), LetterStatus::NotInWord);
        assert_eq!(keyboard.get('Z'), LetterStatus::Unknown);
    }

    #[test]
    fn later_absent_never_downgrades() {
        let guesses = vec![evaluated("slate", "plate"), evaluated("slate", "fight")];
        let keyboard = KeyboardStatus::from_guesses(&guesses);

        assert_eq!(keyboard.get('T'), LetterStatus::CorrectPosition);
        assert_eq!(keyboard.get('G'), LetterStatus::NotInWord);
    }

    #[test]
    fn duplicate_letters_within_one_guess_keep_best() {
        // First L is absent, second is exact
        let keyboard = KeyboardStatus::from_guesses(&[evaluated("slate", "llama")]);
        assert_eq!(keyboard.get('L'), LetterStatus::CorrectPosition);
    }

    #[test]
    fn non_letters_are_unknown() {
        let keyboard = KeyboardStatus::default();
        assert_eq!(keyboard.get('1'), LetterStatus::Unknown);
        assert_eq!(keyboard.get('é'), LetterStatus::Unknown);
    }

    #[test]
    fn serializes_as_letter_map() {
        let keyboard = KeyboardStatus::from_guesses(&[evaluated("slate", "crane")]);
        let json = serde_json::to_value(keyboard).unwrap();
        assert_eq!(json["A"], "CORRECT_POSITION");
        assert_eq!(json["C"], "NOT_IN_WORD");
        assert_eq!(json["Q"], "UNKNOWN");
    }
}
