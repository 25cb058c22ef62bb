//! Property-based tests for guess evaluation
//!
//! These tests verify invariants that should hold for all inputs:
//! - The status merge rule is idempotent and never lowers a status
//! - Evaluation yields one status per letter and leaves the target alone
//! - A word evaluated against itself is fully correct
//! - Re-evaluating a guess never downgrades a letter

use polywordic::core::{LetterStatus, Word};
use polywordic::game::GameSession;
use proptest::prelude::*;

fn status() -> impl Strategy<Value = LetterStatus> {
    prop::sample::select(LetterStatus::ALL.to_vec())
}

/// Upper-case words over a small alphabet so duplicates are common
fn word(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['A', 'B', 'C', 'E', 'N', 'O']), len)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Property: merging the same candidate twice equals merging it once
    #[test]
    fn prop_merge_is_idempotent(current in status(), candidate in status()) {
        let once = current.merge(candidate);
        prop_assert_eq!(once.merge(candidate), once);
    }

    /// Property: a merge never produces a lower status than it started with
    #[test]
    fn prop_merge_never_lowers(current in status(), candidate in status()) {
        let merged = current.merge(candidate);
        prop_assert!(merged >= current);
        if current == LetterStatus::CorrectPosition {
            prop_assert_eq!(merged, LetterStatus::CorrectPosition);
        }
    }

    /// Property: one status per letter, written onto the guess, target untouched
    #[test]
    fn prop_evaluation_shape(
        (target_text, guess_text) in (1usize..8).prop_flat_map(|len| (word(len), word(len)))
    ) {
        let len = target_text.len();
        let target = Word::with_length(&target_text, len).unwrap();
        let mut guess = Word::with_length(&guess_text, len).unwrap();
        let statuses = target.evaluate(&mut guess).unwrap();

        prop_assert_eq!(statuses.len(), len);
        prop_assert_eq!(guess.statuses(), statuses.clone());
        prop_assert!(statuses.iter().all(|s| *s != LetterStatus::Unknown));
        prop_assert!(target.statuses().iter().all(|s| *s == LetterStatus::Unknown));
    }

    /// Property: green count equals positions where the letters agree
    #[test]
    fn prop_correct_positions_match_letters(
        (target_text, guess_text) in (1usize..8).prop_flat_map(|len| (word(len), word(len)))
    ) {
        let len = target_text.len();
        let target = Word::with_length(&target_text, len).unwrap();
        let mut guess = Word::with_length(&guess_text, len).unwrap();
        let statuses = target.evaluate(&mut guess).unwrap();

        for (i, (t, g)) in target_text.chars().zip(guess_text.chars()).enumerate() {
            prop_assert_eq!(statuses[i] == LetterStatus::CorrectPosition, t == g);
        }
    }

    /// Property: a word evaluated against itself is all green
    #[test]
    fn prop_self_evaluation_is_fully_correct(text in (1usize..8).prop_flat_map(word)) {
        let target = Word::with_length(&text, text.len()).unwrap();
        let mut guess = target.clone();
        target.evaluate(&mut guess).unwrap();
        prop_assert!(guess.is_fully_correct());
    }

    /// Property: evaluating one guess against several targets only ever raises statuses
    #[test]
    fn prop_reevaluation_is_monotonic(
        (guess_text, targets) in (1usize..8).prop_flat_map(|len| {
            (word(len), prop::collection::vec(word(len), 1..5))
        })
    ) {
        let len = guess_text.len();
        let mut guess = Word::with_length(&guess_text, len).unwrap();
        let mut previous = guess.statuses();

        for target_text in targets {
            let target = Word::with_length(&target_text, len).unwrap();
            target.evaluate(&mut guess).unwrap();
            let current = guess.statuses();
            for (before, after) in previous.iter().zip(&current) {
                prop_assert!(after >= before);
            }
            previous = current;
        }
    }

    /// Property: once a letter is green on the keyboard it stays green
    #[test]
    fn prop_keyboard_green_is_sticky(
        (target_text, guesses) in prop::collection::vec(word(5), 2..7)
            .prop_flat_map(|guesses| (word(5), Just(guesses)))
    ) {
        let mut session = GameSession::new("prop", &target_text, guesses.len() + 1).unwrap();
        let mut greens: Vec<char> = Vec::new();

        for guess in &guesses {
            if session.is_game_over() {
                break;
            }
            session.submit_guess(guess).unwrap();
            let keyboard = session.aggregate_statuses();
            for &c in &greens {
                prop_assert_eq!(keyboard.get(c), LetterStatus::CorrectPosition);
            }
            greens = keyboard.letters_with(LetterStatus::CorrectPosition);
        }
    }
}
