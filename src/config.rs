//! Runtime configuration
//!
//! Values come from an optional `polywordic.toml`, then command-line flags
//! (and their environment variables) override them.

use crate::core::DEFAULT_WORD_LENGTH;
use crate::game::Difficulty;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "polywordic.toml";

const WORD_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 2..=12;

/// Check a word length from any source against the playable range
///
/// # Errors
/// Returns `ConfigError::InvalidWordLength` outside `2..=12`.
pub fn validate_word_length(word_length: usize) -> Result<usize, ConfigError> {
    if WORD_LENGTH_RANGE.contains(&word_length) {
        Ok(word_length)
    } else {
        Err(ConfigError::InvalidWordLength(word_length))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("word_length must be between 2 and 12, got {0}")]
    InvalidWordLength(usize),
}

/// Contents of `polywordic.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Difficulty name used when none is given on the command line
    pub default_difficulty: String,
    pub word_length: usize,
    /// Dictionary file; the embedded list is used when absent
    pub wordlist: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::default().name().to_string(),
            word_length: DEFAULT_WORD_LENGTH,
            wordlist: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate TOML contents
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidWordLength` for an unplayable word length.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, [`CONFIG_FILE_NAME`] in the
    /// working directory is used if present, otherwise defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if a file that should be read cannot be read,
    /// parsed or validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE_NAME), false),
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loaded config");
                Self::from_toml(&contents, &path)
            }
            Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        validate_word_length(self.word_length)?;
        Ok(self)
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_name(&self.default_difficulty)
    }
}
