//! Facade tying the session store, difficulty factory and dictionary together

use super::error::ServiceError;
use super::store::SessionStore;
use crate::core::Word;
use crate::game::{Difficulty, GameId, GameSession, GameView};
use crate::wordlists::{WordRepository, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Manages every live game for one host
///
/// Access is `&mut self` for anything that touches a session, so a host
/// sharing the service across requests must wrap it in its own lock.
pub struct GameService<W: WordSource = WordRepository> {
    store: SessionStore,
    words: W,
    rng: StdRng,
}

impl<W: WordSource> GameService<W> {
    /// Service seeded from the operating system
    pub fn new(words: W) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Service with a caller-provided RNG, for reproducible target selection
    pub fn with_rng(words: W, rng: StdRng) -> Self {
        Self {
            store: SessionStore::new(),
            words,
            rng,
        }
    }

    pub const fn words(&self) -> &W {
        &self.words
    }

    /// Start a game with a random target and a fresh id
    ///
    /// # Errors
    /// Returns `ServiceError::EmptyDictionary` if there is nothing to pick from.
    pub fn create_game(&mut self, difficulty: Difficulty) -> Result<&GameSession, ServiceError> {
        let target = self
            .words
            .random_word(&mut self.rng)
            .ok_or(ServiceError::EmptyDictionary)?
            .to_string();

        let id = GameId::generate();
        let session = difficulty.create_session(id, &target, self.words.word_length())?;

        info!(
            game_id = %session.id(),
            difficulty = %difficulty,
            max_attempts = session.max_attempts(),
            "game created"
        );
        Ok(self.store.insert(session))
    }

    /// Start a game from a difficulty name; unknown names mean `EASY`
    ///
    /// # Errors
    /// Same as [`GameService::create_game`].
    pub fn create_game_named(&mut self, difficulty: &str) -> Result<&GameSession, ServiceError> {
        self.create_game(Difficulty::from_name(difficulty))
    }

    /// # Errors
    /// Returns `ServiceError::GameNotFound` for an unknown id.
    pub fn game(&self, id: &GameId) -> Result<&GameSession, ServiceError> {
        self.store
            .get(id)
            .ok_or_else(|| ServiceError::GameNotFound(id.clone()))
    }

    /// # Errors
    /// Returns `ServiceError::GameNotFound` for an unknown id.
    pub fn game_mut(&mut self, id: &GameId) -> Result<&mut GameSession, ServiceError> {
        self.store
            .get_mut(id)
            .ok_or_else(|| ServiceError::GameNotFound(id.clone()))
    }

    /// Snapshot of a game for the API boundary
    ///
    /// # Errors
    /// Returns `ServiceError::GameNotFound` for an unknown id.
    pub fn view(&self, id: &GameId) -> Result<GameView, ServiceError> {
        self.game(id).map(GameView::from)
    }

    /// Validate a guess against the dictionary, then submit it
    ///
    /// Length and dictionary checks run before the session is looked at, so a
    /// rejected word never costs an attempt.
    ///
    /// # Errors
    /// - `ServiceError::InvalidGuessLength` for a guess of the wrong length
    /// - `ServiceError::NotInDictionary` for an unknown word
    /// - `ServiceError::GameNotFound` for an unknown id
    /// - `ServiceError::Game` for anything the session itself rejects
    pub fn make_guess(&mut self, id: &GameId, guess: &str) -> Result<Word, ServiceError> {
        let expected = self.words.word_length();
        if guess.chars().count() != expected {
            return Err(ServiceError::InvalidGuessLength { expected });
        }
        if !self.words.is_valid_word(guess) {
            debug!(game_id = %id, guess, "rejected word not in dictionary");
            return Err(ServiceError::NotInDictionary(guess.to_string()));
        }

        Ok(self.game_mut(id)?.submit_guess(guess)?)
    }

    /// Discard a game; unknown ids are ignored
    ///
    /// Returns `true` if a game was removed.
    pub fn delete_game(&mut self, id: &GameId) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            debug!(game_id = %id, "game deleted");
        }
        removed
    }

    pub fn active_game_count(&self) -> usize {
        self.store.len()
    }

    pub const fn available_difficulties(&self) -> [Difficulty; 3] {
        Difficulty::ALL
    }

    pub fn is_valid_difficulty(&self, name: &str) -> bool {
        Difficulty::parse(name).is_some()
    }
}
