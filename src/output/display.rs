//! Display functions for command results

use super::formatters::{create_progress_bar, statuses_to_emoji, word_tiles};
use crate::commands::{CheckResult, SimulationResult};
use crate::game::Difficulty;
use colored::Colorize;

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.text().bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}  {}",
        word_tiles(&result.guess),
        statuses_to_emoji(&result.statuses)
    );

    for letter in result.guess.letters() {
        println!(
            "   {} {} {}",
            (letter.position() + 1).to_string().bright_black(),
            letter.character(),
            letter.status().name()
        );
    }

    println!();
    if result.is_solved() {
        println!("{}", "✅ Exact match".green().bold());
    }
}

/// Print per-difficulty simulation statistics
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for stats in &result.stats {
        println!(
            "\n🎯 {} ({} attempts)",
            stats.difficulty.name().bright_cyan().bold(),
            stats.difficulty.max_attempts()
        );
        println!("   Games:            {}", stats.games);
        println!(
            "   Win rate:         {}",
            format!("{:.1}%", stats.win_rate() * 100.0)
                .bright_yellow()
                .bold()
        );
        if let Some(avg) = stats.average_win_attempts() {
            println!("   Average to win:   {avg:.2}");
        }

        for attempt in 1..=stats.difficulty.max_attempts() {
            let count = stats.distribution.get(&attempt).copied().unwrap_or(0);
            let pct = if stats.games == 0 {
                0.0
            } else {
                count as f64 / stats.games as f64 * 100.0
            };
            println!(
                "   {attempt}: {} {count:5} ({pct:5.1}%)",
                create_progress_bar(pct, 100.0, 40).green()
            );
        }
        let losses = stats.games - stats.wins;
        println!("   ✗: {losses:5}");
    }

    println!("\n   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
}

/// Print the available difficulty levels
pub fn print_difficulties() {
    println!("\n{}", "Difficulty levels:".bright_cyan().bold());
    for difficulty in Difficulty::ALL {
        let marker = if difficulty == Difficulty::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "   {:<8} {} attempts{}",
            difficulty.name().bright_white().bold(),
            difficulty.max_attempts(),
            marker.bright_black()
        );
    }
}
