//! Command implementations

pub mod check;
pub mod simple;
pub mod simulate;

pub use check::{CheckResult, check_guess};
pub use simple::{SimpleOptions, SimpleSummary, run_simple};
pub use simulate::{DifficultyStats, SimulationConfig, SimulationResult, run_simulation};
