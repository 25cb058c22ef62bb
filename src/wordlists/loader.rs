//! Word list loading utilities
//!
//! Every entry is trimmed, uppercased and kept only if it is exactly the
//! requested number of ASCII letters. Duplicates are dropped, first wins.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load and normalize words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use polywordic::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize_words(content.lines(), word_length))
}

/// Normalize raw entries into a de-duplicated uppercase list
///
/// # Examples
/// ```
/// use polywordic::wordlists::loader::normalize_words;
///
/// let words = normalize_words(["crane", " Slate ", "CRANE", "toolong"], 5);
/// assert_eq!(words, vec!["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn normalize_words<I, S>(entries: I, word_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    entries
        .into_iter()
        .filter_map(|entry| {
            let word = entry.as_ref().trim().to_ascii_uppercase();
            is_playable(&word, word_length).then_some(word)
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

fn is_playable(word: &str, word_length: usize) -> bool {
    !word.is_empty() && word.len() == word_length && word.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_uppercases_and_trims() {
        let words = normalize_words(["crane", "  slate\t", "Irate"], 5);
        assert_eq!(words, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn normalize_skips_invalid() {
        let words = normalize_words(["crane", "toolong", "abc", "", "cr4ne", "slate"], 5);
        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn normalize_removes_duplicates_keeping_order() {
        let words = normalize_words(["slate", "crane", "SLATE", "Crane"], 5);
        assert_eq!(words, vec!["SLATE", "CRANE"]);
    }

    #[test]
    fn normalize_respects_word_length() {
        let words = normalize_words(["castle", "crane", "bridge"], 6);
        assert_eq!(words, vec!["CASTLE", "BRIDGE"]);
    }

    #[test]
    fn normalize_never_keeps_empty_entries() {
        let words = normalize_words(["", "  ", "apple"], 0);
        assert!(words.is_empty());
    }

    #[test]
    fn normalize_empty() {
        let input: [&str; 0] = [];
        assert!(normalize_words(input, 5).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\n\nnope\nirate").unwrap();

        let words = load_from_file(file.path(), 5).unwrap();
        assert_eq!(words, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt", 5).is_err());
    }
}
