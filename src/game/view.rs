//! Serializable snapshots for the API boundary
//!
//! These are what a controller layer hands back to clients. The target word
//! only appears once the game is over.

use super::keyboard::KeyboardStatus;
use super::session::{GameId, GameSession};
use super::state::GameState;
use crate::core::{LetterStatus, Word};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterView {
    pub letter: char,
    pub position: usize,
    pub status: LetterStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordView {
    pub word: String,
    pub letters: Vec<LetterView>,
}

impl From<&Word> for WordView {
    fn from(word: &Word) -> Self {
        Self {
            word: word.text().to_string(),
            letters: word
                .letters()
                .iter()
                .map(|l| LetterView {
                    letter: l.character(),
                    position: l.position(),
                    status: l.status(),
                })
                .collect(),
        }
    }
}

/// Full game state, as returned when a client fetches a game
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub game_id: GameId,
    pub max_attempts: usize,
    pub current_attempt: usize,
    pub remaining_attempts: usize,
    pub game_over: bool,
    pub won: bool,
    pub state_name: GameState,
    pub guesses: Vec<WordView>,
    pub letter_statuses: KeyboardStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        Self {
            game_id: session.id().clone(),
            max_attempts: session.max_attempts(),
            current_attempt: session.current_attempt(),
            remaining_attempts: session.remaining_attempts(),
            game_over: session.is_game_over(),
            won: session.is_won(),
            state_name: session.state(),
            guesses: session.guess_history().iter().map(WordView::from).collect(),
            letter_statuses: session.aggregate_statuses(),
            target_word: session.target_word_text().map(str::to_string),
        }
    }
}

/// Response to a single guess
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessView {
    pub guess: WordView,
    pub game_over: bool,
    pub won: bool,
    pub state_name: GameState,
    pub current_attempt: usize,
    pub remaining_attempts: usize,
    pub letter_statuses: KeyboardStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
}

impl GuessView {
    #[must_use]
    pub fn new(guess: &Word, session: &GameSession) -> Self {
        Self {
            guess: WordView::from(guess),
            game_over: session.is_game_over(),
            won: session.is_won(),
            state_name: session.state(),
            current_attempt: session.current_attempt(),
            remaining_attempts: session.remaining_attempts(),
            letter_statuses: session.aggregate_statuses(),
            target_word: session.target_word_text().map(str::to_string),
        }
    }
}
