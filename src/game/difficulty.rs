//! Difficulty levels and the sessions they create
//!
//! A difficulty is nothing more than an attempt budget.

use super::error::GameError;
use super::session::{GameId, GameSession};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a difficulty name, case-insensitive
    ///
    /// Returns `None` for unknown names; see [`Difficulty::from_name`] for the
    /// forgiving variant.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Parse a difficulty name, falling back to `Easy` for unknown names
    ///
    /// # Examples
    /// ```
    /// use polywordic::game::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name("hard"), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Easy);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }

    #[must_use]
    pub const fn max_attempts(self) -> usize {
        match self {
            Self::Easy => 6,
            Self::Medium => 5,
            Self::Hard => 4,
        }
    }

    /// Build a fresh session with this difficulty's attempt budget
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if `target` is not `word_length` letters.
    pub fn create_session(
        self,
        id: impl Into<GameId>,
        target: &str,
        word_length: usize,
    ) -> Result<GameSession, GameError> {
        GameSession::with_word_length(id, target, self.max_attempts(), word_length)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
