//! Game lifecycle state machine
//!
//! `Active` is the only state that accepts guesses; `Won` and `Lost` are
//! terminal. A transition never mutates anything itself: it evaluates the
//! guess and reports the next state, and the session commits both.

use super::error::{GameError, GameOverReason};
use crate::core::Word;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[default]
    Active,
    Won,
    Lost,
}

/// Read-only view of the session a transition needs
pub(crate) struct TurnContext<'a> {
    pub target: &'a Word,
    pub attempts_used: usize,
    pub max_attempts: usize,
}

/// Outcome of a successful transition, not yet committed
#[derive(Debug)]
pub(crate) struct Transition {
    pub next: GameState,
    pub guess: Word,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    #[inline]
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    /// Name used at the API boundary: `ACTIVE`, `WON` or `LOST`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Won => "WON",
            Self::Lost => "LOST",
        }
    }

    /// Handle one guess in this state
    pub(crate) fn transition(
        self,
        ctx: &TurnContext<'_>,
        guess_text: &str,
    ) -> Result<Transition, GameError> {
        match self {
            Self::Won => Err(GameError::GameAlreadyOver(GameOverReason::Won)),
            Self::Lost => Err(GameError::GameAlreadyOver(GameOverReason::Lost {
                target: ctx.target.text().to_string(),
            })),
            Self::Active => Self::play_turn(ctx, guess_text),
        }
    }

    fn play_turn(ctx: &TurnContext<'_>, guess_text: &str) -> Result<Transition, GameError> {
        // Unreachable through normal play: the last attempt always moves to Lost
        if ctx.attempts_used >= ctx.max_attempts {
            return Err(GameError::NoAttemptsRemaining {
                max_attempts: ctx.max_attempts,
            });
        }

        let mut guess = Word::with_length(guess_text, ctx.target.len())?;
        ctx.target.evaluate(&mut guess)?;

        let next = if ctx.target.matches(&guess) {
            Self::Won
        } else if ctx.attempts_used + 1 >= ctx.max_attempts {
            Self::Lost
        } else {
            Self::Active
        };

        Ok(Transition { next, guess })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
