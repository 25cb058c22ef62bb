//! Core domain types for the game
//!
//! Letters, their feedback statuses, and words with the guess-evaluation
//! algorithm. Nothing here knows about sessions, storage or I/O.

mod letter;
mod status;
mod word;

pub use letter::Letter;
pub use status::LetterStatus;
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
