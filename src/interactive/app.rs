//! TUI application state and logic

use crate::game::{Difficulty, GameId, GameSession};
use crate::service::{GameService, ServiceError};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<W: WordSource> {
    pub service: GameService<W>,
    pub difficulty: Difficulty,
    pub game_id: GameId,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won on attempt `n`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record_win(&mut self, attempts: usize) {
        self.games_won += 1;
        if self.guess_distribution.len() <= attempts {
            self.guess_distribution.resize(attempts + 1, 0);
        }
        self.guess_distribution[attempts] += 1;
    }
}

impl<W: WordSource> App<W> {
    /// Start the app with a first game already running
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary cannot supply a target word.
    pub fn new(mut service: GameService<W>, difficulty: Difficulty) -> Result<Self, ServiceError> {
        let game_id = service.create_game(difficulty)?.id().clone();

        let mut app = Self {
            service,
            difficulty,
            game_id,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                total_games: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.announce_game();
        Ok(app)
    }

    /// The game being played
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.service.game(&self.game_id).ok()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.service.words().word_length()
    }

    fn announce_game(&mut self) {
        let text = format!(
            "New {} game: guess the {}-letter word in {} attempts",
            self.difficulty,
            self.word_length(),
            self.difficulty.max_attempts()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.service.delete_game(&self.game_id);
        match self.service.create_game(self.difficulty) {
            Ok(session) => {
                self.game_id = session.id().clone();
                self.stats.total_games += 1;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.announce_game();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.word_length() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if let Err(e) = self.service.make_guess(&self.game_id, &guess) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            self.input_buffer = guess;
            return;
        }

        let Some(session) = self.session() else {
            return;
        };
        let attempts = session.current_attempt();
        let won = session.is_won();
        let target = session.target_word_text().map(str::to_string);

        if won {
            self.stats.record_win(attempts);
            let celebration = match attempts {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                n => format!("🎉 SOLVED in {n} guesses! 🎉"),
            };
            self.add_message(&celebration, MessageStyle::Success);
        } else if let Some(target) = target {
            self.add_message(
                &format!("Out of guesses. The word was {target}"),
                MessageStyle::Error,
            );
        }

        if self.session().is_some_and(GameSession::is_game_over) {
            self.input_mode = InputMode::GameOver;
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => self.pop_char(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; releases arrive as separate events on Windows
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordRepository;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(difficulty: Difficulty) -> App<WordRepository> {
        let words = WordRepository::from_words(["apple", "house"], 5);
        let service = GameService::with_rng(words, StdRng::seed_from_u64(7));
        App::new(service, difficulty).unwrap()
    }

    fn press(app: &mut App<WordRepository>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<WordRepository>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    /// Reveal the target by playing a throwaway copy of the session to the end
    fn target(app: &App<WordRepository>) -> String {
        let mut probe = app.session().unwrap().clone();
        while !probe.is_game_over() {
            probe.submit_guess("zzzzz").unwrap();
        }
        probe.target_word_text().unwrap().to_string()
    }

    #[test]
    fn starts_with_active_game() {
        let app = app(Difficulty::Easy);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.session().unwrap().max_attempts(), 6);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn input_is_limited_to_word_length_letters() {
        let mut app = app(Difficulty::Easy);
        for c in "ab1cdefg".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "ABCDE");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "ABCD");
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let mut app = app(Difficulty::Easy);
        type_word(&mut app, "abcde");

        assert_eq!(app.input_buffer, "ABCDE");
        assert_eq!(app.session().unwrap().current_attempt(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_switches_to_game_over() {
        let mut app = app(Difficulty::Easy);
        let target = target(&app);
        type_word(&mut app, &target);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn losing_reveals_target() {
        let mut app = app(Difficulty::Hard);
        let target = target(&app);
        let other = if target == "APPLE" { "house" } else { "apple" };
        for _ in 0..4 {
            type_word(&mut app, other);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains(&target)));
    }

    #[test]
    fn new_game_after_game_over() {
        let mut app = app(Difficulty::Medium);
        let target = target(&app);
        type_word(&mut app, &target);
        let first = app.game_id.clone();

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_ne!(app.game_id, first);
        assert_eq!(app.stats.total_games, 2);
        assert_eq!(app.service.active_game_count(), 1);
    }

    #[test]
    fn quit_keys() {
        let mut first = app(Difficulty::Easy);
        first.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(first.should_quit);

        let mut second = app(Difficulty::Easy);
        press(&mut second, KeyCode::Esc);
        assert!(second.should_quit);
    }
}
