//! Polywordic
//!
//! A word-guessing game in the Wordle family. Each guess is scored letter by
//! letter against a hidden word, and a session allows a limited number of
//! guesses that depends on the difficulty.
//!
//! # Quick Start
//!
//! ```rust
//! use polywordic::core::{LetterStatus, Word};
//! use polywordic::game::Difficulty;
//!
//! // Score a single guess
//! let target = Word::new("slate").unwrap();
//! let mut guess = Word::new("crane").unwrap();
//! let statuses = target.evaluate(&mut guess).unwrap();
//! assert_eq!(statuses[2], LetterStatus::CorrectPosition);
//!
//! // Play a session
//! let mut session = Difficulty::Hard.create_session("demo", "slate", 5).unwrap();
//! session.submit_guess("slate").unwrap();
//! assert!(session.is_won());
//! ```

// Core domain types
pub mod core;

// Sessions, state machine and difficulty levels
pub mod game;

// Session store and game facade
pub mod service;

// Word lists
pub mod wordlists;

// Config file handling
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
