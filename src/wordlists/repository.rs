//! Dictionary lookups and random target selection

use super::embedded::WORDS;
use super::loader::{load_from_file, normalize_words};
use crate::core::DEFAULT_WORD_LENGTH;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Used when a dictionary source turns out to be empty
pub const FALLBACK_WORDS: [&str; 10] = [
    "ABOUT", "ABOVE", "APPLE", "HOUSE", "LIGHT", "MUSIC", "TABLE", "TRAIN", "SMILE", "WATER",
];

/// Source of target words and the oracle for guess validity
///
/// Guess validation happens in the calling layer before a guess reaches a
/// session; sessions never consult the dictionary themselves.
pub trait WordSource {
    /// Pick a target word, or `None` if the source is empty
    fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str>;

    /// Case-insensitive dictionary membership
    fn is_valid_word(&self, word: &str) -> bool;

    fn all_words(&self) -> Vec<String>;

    /// Length every word in this source has
    fn word_length(&self) -> usize;
}

/// In-memory dictionary
#[derive(Debug, Clone)]
pub struct WordRepository {
    words: Vec<String>,
    index: FxHashSet<String>,
    word_length: usize,
}

impl WordRepository {
    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS.iter().copied(), DEFAULT_WORD_LENGTH)
    }

    /// Build from raw entries, falling back to [`FALLBACK_WORDS`] when nothing
    /// usable remains
    #[must_use]
    pub fn from_words<I, S>(entries: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = normalize_words(entries, word_length);
        if words.is_empty() {
            words = normalize_words(FALLBACK_WORDS, word_length);
            if words.is_empty() {
                warn!(word_length, "dictionary empty and no fallback list for this length");
            } else {
                warn!(
                    fallback = words.len(),
                    "dictionary empty, using fallback list"
                );
            }
        } else {
            info!(words = words.len(), "dictionary loaded");
        }

        let index = words.iter().cloned().collect();
        Self {
            words,
            index,
            word_length,
        }
    }

    /// Load a dictionary file, one word per line
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Self> {
        let words = load_from_file(path, word_length)?;
        Ok(Self::from_words(words, word_length))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for WordRepository {
    fn default() -> Self {
        Self::embedded()
    }
}

impl WordSource for WordRepository {
    fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    fn is_valid_word(&self, word: &str) -> bool {
        word.len() == self.word_length && self.index.contains(&word.to_ascii_uppercase())
    }

    fn all_words(&self) -> Vec<String> {
        self.words.clone()
    }

    fn word_length(&self) -> usize {
        self.word_length
    }
}
