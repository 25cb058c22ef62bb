//! Polywordic - CLI
//!
//! Word-guessing game with a TUI, a line-based mode and a few utility
//! commands for checking guesses and simulating games.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use polywordic::{
    commands::{SimpleOptions, SimulationConfig, check_guess, run_simple, run_simulation},
    config::{GameConfig, validate_word_length},
    core::DEFAULT_WORD_LENGTH,
    game::Difficulty,
    interactive::{App, run_tui},
    output::{print_check_result, print_difficulties, print_simulation_result},
    service::GameService,
    wordlists::WordRepository,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "polywordic",
    about = "Guess the hidden word with green/yellow/gray feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: EASY (6 attempts), MEDIUM (5) or HARD (4)
    #[arg(short, long, global = true, env = "POLYWORDIC_DIFFICULTY")]
    difficulty: Option<String>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true, env = "POLYWORDIC_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Word length; needs a matching --wordlist unless it is 5
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,

    /// Config file (default: ./polywordic.toml if present)
    #[arg(short, long, global = true, env = "POLYWORDIC_CONFIG")]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple {
        /// Print the game state as JSON after every guess
        #[arg(long)]
        json: bool,
    },

    /// Evaluate one guess against a target
    Check {
        /// The hidden word
        target: String,

        /// The guess to evaluate
        guess: String,
    },

    /// Play many random games and report win rates
    Simulate {
        /// Number of games per difficulty
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Only simulate the global --difficulty instead of all levels
        #[arg(long)]
        only: bool,
    },

    /// List difficulty levels
    Difficulties,
}

/// Settings after merging CLI flags over the config file
struct Settings {
    difficulty: Difficulty,
    word_length: usize,
    wordlist: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "polywordic=warn",
        1 => "polywordic=info",
        _ => "polywordic=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "configuration");

    let difficulty = match &cli.difficulty {
        Some(name) => Difficulty::parse(name)
            .with_context(|| format!("Unknown difficulty '{name}' (try EASY, MEDIUM or HARD)"))?,
        None => config.difficulty(),
    };

    let word_length = match cli.length {
        Some(length) => validate_word_length(length).context("Invalid --length")?,
        None => config.word_length,
    };

    Ok(Settings {
        difficulty,
        word_length,
        wordlist: cli.wordlist.clone().or(config.wordlist),
    })
}

fn load_words(settings: &Settings) -> Result<WordRepository> {
    match &settings.wordlist {
        Some(path) => WordRepository::from_file(path, settings.word_length)
            .with_context(|| format!("Failed to read word list {}", path.display())),
        None if settings.word_length == DEFAULT_WORD_LENGTH => Ok(WordRepository::embedded()),
        None => bail!(
            "The embedded word list only has {DEFAULT_WORD_LENGTH}-letter words; pass --wordlist for length {}",
            settings.word_length
        ),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.take().unwrap_or(Commands::Play);

    // These two need neither config nor dictionary
    match &command {
        Commands::Check { target, guess } => {
            let result = check_guess(target, guess).context("Cannot evaluate guess")?;
            print_check_result(&result);
            return Ok(());
        }
        Commands::Difficulties => {
            print_difficulties();
            return Ok(());
        }
        _ => {}
    }

    let settings = resolve_settings(&cli)?;
    let words = load_words(&settings)?;

    match &command {
        Commands::Play => {
            let app = App::new(GameService::new(words), settings.difficulty)
                .context("Failed to start game")?;
            run_tui(app)
        }
        Commands::Simple { json } => {
            let mut service = GameService::new(words);
            let options = SimpleOptions {
                difficulty: settings.difficulty,
                json: *json,
            };
            let summary = run_simple(&mut service, options).context("Simple mode failed")?;
            debug!(?summary, "simple mode finished");
            Ok(())
        }
        Commands::Simulate { count, seed, only } => {
            let mut config = SimulationConfig::new(*count);
            config.seed = *seed;
            if *only {
                config.difficulties = vec![settings.difficulty];
            }
            println!("Simulating {count} games per difficulty...");
            let result = run_simulation(&words, &config).context("Simulation failed")?;
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Check { .. } | Commands::Difficulties => Ok(()),
    }
}
