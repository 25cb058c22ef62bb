//! One-off guess evaluation
//!
//! Evaluates a single guess against a given target without any session.

use crate::core::{LetterStatus, Word, WordError};

/// Result of checking a guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub statuses: Vec<LetterStatus>,
}

impl CheckResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guess.is_fully_correct()
    }
}

/// Evaluate `guess` against `target`; any length works as long as both match
///
/// # Errors
///
/// Returns an error if either word has non-letter characters or the two
/// lengths differ.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, WordError> {
    let target = Word::with_length(target, target.chars().count())?;
    let mut guess = Word::with_length(guess, guess.chars().count())?;
    let statuses = target.evaluate(&mut guess)?;

    Ok(CheckResult {
        target,
        guess,
        statuses,
    })
}
