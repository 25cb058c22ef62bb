//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Word};
use crate::game::{KEYBOARD_ROWS, KeyboardStatus};
use colored::{ColoredString, Colorize};

/// Render statuses as an emoji row
#[must_use]
pub fn statuses_to_emoji(statuses: &[LetterStatus]) -> String {
    statuses.iter().map(|s| s.emoji()).collect()
}

/// Render an evaluated word's feedback as an emoji row
#[must_use]
pub fn word_to_emoji(word: &Word) -> String {
    statuses_to_emoji(&word.statuses())
}

/// One colored tile for a letter
#[must_use]
pub fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        LetterStatus::CorrectPosition => text.black().on_green().bold(),
        LetterStatus::IncorrectPosition => text.black().on_yellow().bold(),
        LetterStatus::NotInWord => text.white().on_bright_black(),
        LetterStatus::Unknown => text.normal(),
    }
}

/// A whole evaluated word as colored tiles
#[must_use]
pub fn word_tiles(word: &Word) -> String {
    word.letters()
        .iter()
        .map(|l| tile(l.character(), l.status()).to_string())
        .collect()
}

/// Keyboard hint rows, each key colored by its best status so far
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|c| tile(c, keyboard.get(c)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
