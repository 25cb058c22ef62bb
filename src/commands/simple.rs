//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Reads guesses from any `BufRead` so the
//! loop can be driven by a script or a test as easily as by a terminal.

use crate::game::{Difficulty, GameId, GameView};
use crate::output::formatters::{keyboard_rows, word_tiles, word_to_emoji};
use crate::service::GameService;
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Options for the simple mode
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleOptions {
    pub difficulty: Difficulty,
    /// Emit a JSON `GameView` after every accepted guess
    pub json: bool,
}

/// Totals reported when the player quits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleSummary {
    pub games_played: usize,
    pub games_won: usize,
}

enum Flow {
    NewGame,
    Quit,
}

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<W: WordSource>(
    service: &mut GameService<W>,
    options: SimpleOptions,
) -> io::Result<SimpleSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_games(service, options, stdin.lock(), stdout.lock())
}

/// Play games until the input ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_games<W, R, O>(
    service: &mut GameService<W>,
    options: SimpleOptions,
    mut input: R,
    mut out: O,
) -> io::Result<SimpleSummary>
where
    W: WordSource,
    R: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Polywordic - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word. Commands: ':keys' for keyboard hints, ':new' for a new game, ':quit' to exit\n",
        service.words().word_length()
    )?;

    let mut summary = SimpleSummary::default();

    loop {
        let id = match service.create_game(options.difficulty) {
            Ok(session) => session.id().clone(),
            Err(e) => {
                writeln!(out, "❌ {e}")?;
                return Ok(summary);
            }
        };
        summary.games_played += 1;
        writeln!(
            out,
            "🎲 New {} game: {} attempts",
            options.difficulty,
            options.difficulty.max_attempts()
        )?;

        let flow = play_one(service, &id, options, &mut input, &mut out, &mut summary)?;
        service.delete_game(&id);
        if matches!(flow, Flow::Quit) {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(summary);
        }
    }
}

fn play_one<W, R, O>(
    service: &mut GameService<W>,
    id: &GameId,
    options: SimpleOptions,
    input: &mut R,
    out: &mut O,
    summary: &mut SimpleSummary,
) -> io::Result<Flow>
where
    W: WordSource,
    R: BufRead,
    O: Write,
{
    loop {
        let Ok(session) = service.game(id) else {
            return Ok(Flow::NewGame);
        };
        let prompt = format!(
            "Guess {}/{}",
            session.current_attempt() + 1,
            session.max_attempts()
        );
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(Flow::Quit);
        };

        match line.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => return Ok(Flow::Quit),
            ":new" | ":n" => return Ok(Flow::NewGame),
            ":keys" | ":k" => {
                for row in keyboard_rows(&session.aggregate_statuses()) {
                    writeln!(out, "  {row}")?;
                }
                continue;
            }
            "" => continue,
            _ => {}
        }

        let word = match service.make_guess(id, &line) {
            Ok(word) => word,
            Err(e) => {
                writeln!(out, "❌ {e}")?;
                continue;
            }
        };

        writeln!(out, "  {}  {}", word_tiles(&word), word_to_emoji(&word))?;

        let Ok(session) = service.game(id) else {
            return Ok(Flow::NewGame);
        };
        if options.json {
            let view = GameView::from(session);
            writeln!(out, "{}", serde_json::to_string(&view).map_err(io::Error::other)?)?;
        }

        if session.is_won() {
            summary.games_won += 1;
            let attempts = session.current_attempt();
            writeln!(
                out,
                "\n{}",
                format!(
                    "🎉 Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
        } else if let Some(target) = session.target_word_text() {
            writeln!(
                out,
                "\n{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                target.bright_yellow().bold()
            )?;
        }

        if session.is_game_over() {
            let again = read_line(input, out, "Play again? (yes/no)")?;
            return Ok(match again.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => Flow::NewGame,
                _ => Flow::Quit,
            });
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, O: Write>(
    input: &mut R,
    out: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
