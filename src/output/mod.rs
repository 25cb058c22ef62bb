//! Terminal output formatting
//!
//! Colored tiles, emoji rows and result printing for the CLI commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_difficulties, print_simulation_result};
