//! Simulation command
//!
//! Plays many games per difficulty with a guesser that picks at random among
//! the dictionary words still consistent with all feedback so far.

use crate::core::Word;
use crate::game::{Difficulty, GameError};
use crate::wordlists::{WordRepository, WordSource};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub difficulties: Vec<Difficulty>,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(games: usize) -> Self {
        Self {
            games,
            difficulties: Difficulty::ALL.to_vec(),
            seed: None,
            show_progress: true,
        }
    }
}

/// Outcome of a single simulated game
#[derive(Debug, Clone, Copy)]
struct GameOutcome {
    won: bool,
    attempts: usize,
}

/// Aggregate results for one difficulty
#[derive(Debug, Clone)]
pub struct DifficultyStats {
    pub difficulty: Difficulty,
    pub games: usize,
    pub wins: usize,
    /// Winning games keyed by the attempt they were won on
    pub distribution: BTreeMap<usize, usize>,
}

impl DifficultyStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Mean attempts over winning games
    #[must_use]
    pub fn average_win_attempts(&self) -> Option<f64> {
        (self.wins > 0).then(|| {
            let total: usize = self.distribution.iter().map(|(a, n)| a * n).sum();
            total as f64 / self.wins as f64
        })
    }
}

/// Result of a simulation run
pub struct SimulationResult {
    pub stats: Vec<DifficultyStats>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the simulation in parallel across games
///
/// # Errors
///
/// Returns an error if a session rejects a dictionary word, which only happens
/// when the dictionary and the configured word length disagree.
pub fn run_simulation(
    words: &WordRepository,
    config: &SimulationConfig,
) -> Result<SimulationResult, GameError> {
    let word_length = words.word_length();
    let pool: Vec<Word> = words
        .words()
        .iter()
        .filter_map(|w| Word::with_length(w, word_length).ok())
        .collect();

    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let played = config.games.saturating_mul(config.difficulties.len());
    let total = played as u64;
    let pb = if config.show_progress {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut stats = Vec::with_capacity(config.difficulties.len());

    for (d_idx, &difficulty) in config.difficulties.iter().enumerate() {
        pb.set_message(difficulty.name());

        let outcomes = (0..config.games)
            .into_par_iter()
            .map(|game| {
                let seed = game_seed(base_seed, d_idx, config.games, game);
                let outcome = play_game(&pool, difficulty, word_length, seed);
                pb.inc(1);
                outcome
            })
            .collect::<Result<Vec<_>, _>>()?;

        stats.push(summarize(difficulty, &outcomes));
    }

    pb.finish_and_clear();
    let duration = start.elapsed();
    info!(games = played, ?duration, "simulation finished");

    Ok(SimulationResult {
        stats,
        duration,
        games_per_second: played as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Distinct seed per (difficulty, game) pair; wraps instead of overflowing
fn game_seed(base: u64, difficulty_index: usize, games: usize, game: usize) -> u64 {
    base.wrapping_add((difficulty_index as u64).wrapping_mul(games as u64))
        .wrapping_add(game as u64)
}

fn play_game(
    pool: &[Word],
    difficulty: Difficulty,
    word_length: usize,
    seed: u64,
) -> Result<GameOutcome, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let Some(target) = pool.choose(&mut rng) else {
        return Ok(GameOutcome {
            won: false,
            attempts: 0,
        });
    };

    let mut session =
        difficulty.create_session(format!("sim-{seed}"), target.text(), word_length)?;
    let mut candidates: Vec<&Word> = pool.iter().collect();

    while !session.is_game_over() {
        let Some(&pick) = candidates.choose(&mut rng) else {
            break;
        };
        let guess = session.submit_guess(pick.text())?;
        candidates.retain(|c| is_consistent(c, &guess));
    }

    Ok(GameOutcome {
        won: session.is_won(),
        attempts: session.current_attempt(),
    })
}

/// Would `candidate` as the target have produced exactly `guess`'s feedback?
fn is_consistent(candidate: &Word, guess: &Word) -> bool {
    let mut probe = guess.clone();
    probe.reset_statuses();
    candidate
        .evaluate(&mut probe)
        .is_ok_and(|statuses| statuses == guess.statuses())
}

fn summarize(difficulty: Difficulty, outcomes: &[GameOutcome]) -> DifficultyStats {
    let mut distribution = BTreeMap::new();
    let mut wins = 0;
    for outcome in outcomes.iter().filter(|o| o.won) {
        wins += 1;
        *distribution.entry(outcome.attempts).or_insert(0) += 1;
    }

    DifficultyStats {
        difficulty,
        games: outcomes.len(),
        wins,
        distribution,
    }
}
