//! Errors raised by the session state machine

use crate::core::WordError;
use std::fmt;
use thiserror::Error;

/// Why a finished game refused another guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOverReason {
    Won,
    /// Attempts ran out; carries the revealed target
    Lost { target: String },
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "Game is already won! No more guesses allowed."),
            Self::Lost { target } => write!(
                f,
                "Game is over! You've used all your guesses. The word was: {target}"
            ),
        }
    }
}

/// Error type for session creation and guess submission
///
/// Every variant is raised before the session is touched, so a failed call
/// leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("{0}")]
    GameAlreadyOver(GameOverReason),
    #[error("No more guesses allowed: all {max_attempts} attempts used")]
    NoAttemptsRemaining { max_attempts: usize },
    #[error("A game needs at least one attempt")]
    InvalidAttemptBudget,
}
