//! Game sessions and their lifecycle
//!
//! A [`GameSession`] owns one target word and its guess history and moves
//! through [`GameState`]s as guesses arrive.

mod difficulty;
mod error;
mod keyboard;
mod session;
mod state;
mod view;

pub use difficulty::Difficulty;
pub use error::{GameError, GameOverReason};
pub use keyboard::{KEYBOARD_ROWS, KeyboardStatus};
pub use session::{GameId, GameSession};
pub use state::GameState;
pub use view::{GameView, GuessView, LetterView, WordView};
