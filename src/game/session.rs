//! A single game session: target, guess history and lifecycle state

use super::error::GameError;
use super::keyboard::KeyboardStatus;
use super::state::{GameState, TurnContext};
use crate::core::{DEFAULT_WORD_LENGTH, Word};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Opaque session identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Fresh random (UUID v4) identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One player's game
///
/// Owns its target word and guess history exclusively. Callers serialize
/// access per session; there is no internal locking.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: GameId,
    target: Word,
    guesses: Vec<Word>,
    max_attempts: usize,
    state: GameState,
}

impl GameSession {
    /// Create a session for a [`DEFAULT_WORD_LENGTH`]-letter target
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` for a malformed target and
    /// `GameError::InvalidAttemptBudget` when `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use polywordic::game::GameSession;
    ///
    /// let mut session = GameSession::new("demo", "slate", 6).unwrap();
    /// session.submit_guess("crane").unwrap();
    /// assert_eq!(session.remaining_attempts(), 5);
    /// assert_eq!(session.target_word_text(), None);
    /// ```
    pub fn new(id: impl Into<GameId>, target: &str, max_attempts: usize) -> Result<Self, GameError> {
        Self::with_word_length(id, target, max_attempts, DEFAULT_WORD_LENGTH)
    }

    /// Create a session whose words are `word_length` letters long
    ///
    /// # Errors
    /// Same as [`GameSession::new`].
    pub fn with_word_length(
        id: impl Into<GameId>,
        target: &str,
        max_attempts: usize,
        word_length: usize,
    ) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::InvalidAttemptBudget);
        }
        let target = Word::with_length(target, word_length)?;

        Ok(Self {
            id: id.into(),
            target,
            guesses: Vec::with_capacity(max_attempts),
            max_attempts,
            state: GameState::Active,
        })
    }

    #[must_use]
    pub const fn id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn current_attempt(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.state.is_won()
    }

    #[must_use]
    pub const fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// Copy of the guess history; changes to it never reach the session
    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        self.guesses.clone()
    }

    /// Borrowed, read-only guess history
    #[must_use]
    pub fn guess_history(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Word> {
        self.guesses.last()
    }

    /// The target text, revealed only once the game is over
    #[must_use]
    pub fn target_word_text(&self) -> Option<&str> {
        self.is_game_over().then(|| self.target.text())
    }

    /// Submit a guess and advance the state machine
    ///
    /// On success the evaluated guess is recorded and a copy returned. On
    /// failure nothing changes.
    ///
    /// # Errors
    /// - `GameError::GameAlreadyOver` once the game is won or lost
    /// - `GameError::NoAttemptsRemaining` if the budget is spent while active
    /// - `GameError::InvalidWord` if the guess has the wrong length or characters
    pub fn submit_guess(&mut self, guess_text: &str) -> Result<Word, GameError> {
        let ctx = TurnContext {
            target: &self.target,
            attempts_used: self.guesses.len(),
            max_attempts: self.max_attempts,
        };
        let transition = self.state.transition(&ctx, guess_text)?;

        debug!(
            game_id = %self.id,
            attempt = self.guesses.len() + 1,
            guess = transition.guess.text(),
            next = %transition.next,
            "guess evaluated"
        );

        self.guesses.push(transition.guess.clone());
        self.state = transition.next;

        if self.state.is_game_over() {
            info!(
                game_id = %self.id,
                state = %self.state,
                attempts = self.guesses.len(),
                "game finished"
            );
        }

        Ok(transition.guess)
    }

    /// Best status per alphabet letter across every guess so far
    #[must_use]
    pub fn aggregate_statuses(&self) -> KeyboardStatus {
        KeyboardStatus::from_guesses(&self.guesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::game::GameOverReason;

    fn castle(max_attempts: usize) -> GameSession {
        GameSession::with_word_length("test-game", "CASTLE", max_attempts, 6).unwrap()
    }

    #[test]
    fn initial_state() {
        let session = castle(6);
        assert_eq!(session.id().as_str(), "test-game");
        assert_eq!(session.state_name(), "ACTIVE");
        assert!(!session.is_game_over());
        assert!(!session.is_won());
        assert_eq!(session.current_attempt(), 0);
        assert_eq!(session.remaining_attempts(), 6);
        assert_eq!(session.word_length(), 6);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn target_is_hidden_while_active() {
        let mut session = castle(2);
        assert_eq!(session.target_word_text(), None);
        session.submit_guess("bridge").unwrap();
        assert_eq!(session.target_word_text(), None);
        session.submit_guess("palace").unwrap();
        assert_eq!(session.target_word_text(), Some("CASTLE"));
    }

    #[test]
    fn guess_is_recorded_and_returned() {
        let mut session = castle(6);
        let result = session.submit_guess("bridge").unwrap();

        assert_eq!(result.text(), "BRIDGE");
        assert_eq!(session.current_attempt(), 1);
        assert_eq!(session.remaining_attempts(), 5);
        assert_eq!(session.state_name(), "ACTIVE");
        assert_eq!(session.last_guess(), Some(&result));
    }

    #[test]
    fn exact_guess_wins() {
        let mut session = castle(6);
        let result = session.submit_guess("castle").unwrap();

        assert!(result.is_fully_correct());
        assert_eq!(session.state(), GameState::Won);
        assert!(session.is_won());
        assert!(session.is_game_over());
    }

    #[test]
    fn win_on_last_attempt() {
        let mut session = castle(3);
        session.submit_guess("bridge").unwrap();
        session.submit_guess("palace").unwrap();
        session.submit_guess("castle").unwrap();

        assert_eq!(session.state_name(), "WON");
        assert_eq!(session.current_attempt(), 3);
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn exhausting_attempts_loses() {
        let mut session = castle(1);
        session.submit_guess("bridge").unwrap();

        assert_eq!(session.state_name(), "LOST");
        assert!(session.is_game_over());
        assert!(!session.is_won());
        assert_eq!(session.remaining_attempts(), 0);

        let err = session.submit_guess("castle").unwrap_err();
        assert_eq!(
            err,
            GameError::GameAlreadyOver(GameOverReason::Lost {
                target: "CASTLE".to_string()
            })
        );
        assert_eq!(session.current_attempt(), 1);
        assert_eq!(session.state_name(), "LOST");
    }

    #[test]
    fn won_game_rejects_more_guesses() {
        let mut session = castle(6);
        session.submit_guess("castle").unwrap();

        let err = session.submit_guess("bridge").unwrap_err();
        assert!(err.to_string().contains("already won"));
        assert_eq!(session.current_attempt(), 1);
        assert_eq!(session.state_name(), "WON");
    }

    #[test]
    fn invalid_guess_leaves_session_untouched() {
        let mut session = castle(6);
        session.submit_guess("bridge").unwrap();

        for bad in ["abc", "abcdefg", "", "brid9e"] {
            assert!(matches!(
                session.submit_guess(bad),
                Err(GameError::InvalidWord(_))
            ));
        }
        assert_eq!(session.current_attempt(), 1);
        assert_eq!(session.state_name(), "ACTIVE");
    }

    #[test]
    fn guess_history_keeps_order() {
        let mut session = castle(6);
        for guess in ["bridge", "palace", "orange"] {
            session.submit_guess(guess).unwrap();
        }
        let texts: Vec<&str> = session.guess_history().iter().map(Word::text).collect();
        assert_eq!(texts, ["BRIDGE", "PALACE", "ORANGE"]);
    }

    #[test]
    fn returned_guesses_are_a_copy() {
        let mut session = castle(6);
        session.submit_guess("bridge").unwrap();

        let mut copy = session.guesses();
        copy.clear();
        copy.push(Word::with_length("castle", 6).unwrap());

        let again = session.guesses();
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].text(), "BRIDGE");
    }

    #[test]
    fn aggregate_statuses_follow_history() {
        let mut session = castle(6);
        session.submit_guess("bridge").unwrap();
        session.submit_guess("palace").unwrap();

        let keyboard = session.aggregate_statuses();
        assert_eq!(keyboard.to_map().len(), 26);
        assert_eq!(keyboard.get('E'), LetterStatus::CorrectPosition);
        assert_eq!(keyboard.get('A'), LetterStatus::CorrectPosition);
        assert_eq!(keyboard.get('C'), LetterStatus::IncorrectPosition);
        assert_eq!(keyboard.get('B'), LetterStatus::NotInWord);
        assert_eq!(keyboard.get('Z'), LetterStatus::Unknown);
    }

    #[test]
    fn rejects_bad_construction() {
        assert_eq!(
            GameSession::new("g", "slate", 0).unwrap_err(),
            GameError::InvalidAttemptBudget
        );
        assert!(matches!(
            GameSession::new("g", "castle", 6),
            Err(GameError::InvalidWord(_))
        ));
    }
}
