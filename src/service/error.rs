use crate::game::{GameError, GameId};
use thiserror::Error;

/// Error type for service-level operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Game not found: {0}")]
    GameNotFound(GameId),
    #[error("Guess must be exactly {expected} letters")]
    InvalidGuessLength { expected: usize },
    #[error("Not a valid word: {0}")]
    NotInDictionary(String),
    #[error("Dictionary has no target words")]
    EmptyDictionary,
    #[error(transparent)]
    Game(#[from] GameError),
}
