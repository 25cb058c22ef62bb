//! Word representation and guess evaluation
//!
//! A Word stores its normalized (uppercased) text plus one [`Letter`] per
//! position. Evaluating a guess writes the resolved statuses into the guess's
//! own letters, so a guess word doubles as the row of a game board.

use super::{Letter, LetterStatus};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Word length used when a game does not ask for another one
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Error type for word construction and evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// Text is absent or does not have exactly `expected` characters
    #[error("Word must be exactly {expected} letters{}", describe_found(.found))]
    InvalidLength {
        expected: usize,
        found: Option<usize>,
    },
    #[error("Word must contain only ASCII letters, got {0:?}")]
    InvalidCharacters(String),
    #[error("Guess must be same length as target word ({target} letters, got {guess})")]
    LengthMismatch { target: usize, guess: usize },
    #[error("Position must be between 0 and {}, got {position}", .len.saturating_sub(1))]
    PositionOutOfRange { position: usize, len: usize },
}

fn describe_found(found: &Option<usize>) -> String {
    found.map_or_else(|| ", got nothing".to_string(), |n| format!(", got {n}"))
}

/// A fixed-length word whose letters carry feedback statuses
///
/// Two words are equal when their normalized text is equal; letter statuses
/// do not take part in equality.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

impl Word {
    /// Create a word of [`DEFAULT_WORD_LENGTH`] letters
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 or the text contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use polywordic::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a word that must be exactly `length` letters long
    ///
    /// A zero-letter word is never valid, whatever `length` asks for.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` or `WordError::InvalidCharacters`.
    pub fn with_length(text: &str, length: usize) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != length || count == 0 {
            return Err(WordError::InvalidLength {
                expected: length,
                found: Some(count),
            });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters(text.to_string()));
        }

        let text = text.to_ascii_uppercase();
        let letters = text
            .chars()
            .enumerate()
            .map(|(position, character)| Letter::new(character, position))
            .collect();

        Ok(Self { text, letters })
    }

    /// Create a word from input that may be absent
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` when `text` is `None`, otherwise the
    /// same errors as [`Word::with_length`].
    pub fn parse(text: Option<&str>, length: usize) -> Result<Self, WordError> {
        match text {
            Some(text) => Self::with_length(text, length),
            None => Err(WordError::InvalidLength {
                expected: length,
                found: None,
            }),
        }
    }

    /// Normalized uppercase text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Get the letter at `position`
    ///
    /// # Errors
    /// Returns `WordError::PositionOutOfRange` past the end of the word.
    pub fn letter(&self, position: usize) -> Result<&Letter, WordError> {
        self.letters
            .get(position)
            .ok_or(WordError::PositionOutOfRange {
                position,
                len: self.len(),
            })
    }

    /// Get the character at `position`
    ///
    /// # Errors
    /// Returns `WordError::PositionOutOfRange` past the end of the word.
    pub fn char_at(&self, position: usize) -> Result<char, WordError> {
        self.letter(position).map(Letter::character)
    }

    /// Current status of every letter, in position order
    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.letters.iter().map(Letter::status).collect()
    }

    /// Upgrade one letter's status under the merge rule
    ///
    /// # Errors
    /// Returns `WordError::PositionOutOfRange` past the end of the word.
    pub fn update_letter_status(
        &mut self,
        position: usize,
        status: LetterStatus,
    ) -> Result<bool, WordError> {
        let len = self.len();
        self.letters
            .get_mut(position)
            .map(|letter| letter.update_status(status))
            .ok_or(WordError::PositionOutOfRange { position, len })
    }

    /// True iff every letter is `CorrectPosition`
    #[must_use]
    pub fn is_fully_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|letter| letter.status() == LetterStatus::CorrectPosition)
    }

    /// Case-insensitive text comparison
    ///
    /// Accepts another `Word` or anything string-like.
    #[must_use]
    pub fn matches(&self, other: impl AsRef<str>) -> bool {
        self.text.eq_ignore_ascii_case(other.as_ref())
    }

    /// Put every letter back to `Unknown`
    pub fn reset_statuses(&mut self) {
        for letter in &mut self.letters {
            letter.reset_status();
        }
    }

    /// Remaining supply of each character, before any claims
    fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for letter in &self.letters {
            *counts.entry(letter.character()).or_insert(0) += 1;
        }
        counts
    }

    /// Evaluate `guess` against this word as the target
    ///
    /// Writes each resolved status into `guess`'s letters and returns them in
    /// position order. The target is not modified.
    ///
    /// # Algorithm
    /// 1. Count the target's letters.
    /// 2. First pass: exact matches become `CorrectPosition` and consume supply.
    /// 3. Second pass, left to right: a pending letter with supply left becomes
    ///    `IncorrectPosition` and consumes one; otherwise `NotInWord`.
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` when the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use polywordic::core::{LetterStatus, Word};
    ///
    /// let target = Word::new("slate").unwrap();
    /// let mut guess = Word::new("crane").unwrap();
    /// let statuses = target.evaluate(&mut guess).unwrap();
    ///
    /// assert_eq!(statuses[2], LetterStatus::CorrectPosition);
    /// assert_eq!(statuses[1], LetterStatus::NotInWord);
    /// assert_eq!(guess.statuses(), statuses);
    /// ```
    pub fn evaluate(&self, guess: &mut Self) -> Result<Vec<LetterStatus>, WordError> {
        if guess.len() != self.len() {
            return Err(WordError::LengthMismatch {
                target: self.len(),
                guess: guess.len(),
            });
        }

        let mut available = self.letter_counts();
        let mut resolved: Vec<Option<LetterStatus>> = vec![None; self.len()];

        // First pass: exact matches claim their supply before anything else
        for (slot, (guess_letter, target_letter)) in resolved
            .iter_mut()
            .zip(guess.letters.iter().zip(&self.letters))
        {
            if guess_letter.character() == target_letter.character() {
                *slot = Some(LetterStatus::CorrectPosition);
                if let Some(count) = available.get_mut(&guess_letter.character()) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced vs absent, ties broken left to right
        for (slot, guess_letter) in resolved.iter_mut().zip(&guess.letters) {
            if slot.is_some() {
                continue;
            }
            let status = match available.get_mut(&guess_letter.character()) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    LetterStatus::IncorrectPosition
                }
                _ => LetterStatus::NotInWord,
            };
            *slot = Some(status);
        }

        let statuses: Vec<LetterStatus> = resolved
            .into_iter()
            .map(|status| status.unwrap_or(LetterStatus::NotInWord))
            .collect();

        for (letter, &status) in guess.letters.iter_mut().zip(&statuses) {
            letter.update_status(status);
        }

        Ok(statuses)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl std::hash::Hash for Word {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
