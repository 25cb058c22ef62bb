//! Word lists and the dictionary
//!
//! Provides the embedded word list compiled into the binary, file loading, and
//! the [`WordSource`] the game service draws targets from.

mod embedded;
pub mod loader;
mod repository;

pub use embedded::{WORDS, WORDS_COUNT};
pub use repository::{FALLBACK_WORDS, WordRepository, WordSource};
