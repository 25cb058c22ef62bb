//! TUI rendering with ratatui
//!
//! Board, keyboard hints, messages and status bar for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, Word};
use crate::game::{GameSession, KEYBOARD_ROWS, KeyboardStatus};
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let session = app.session();
    render_board(f, app, session, main_chunks[0]);
    render_info_panel(f, app, session, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::CorrectPosition => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::IncorrectPosition => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::NotInWord => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn word_line(word: &Word) -> Line<'static> {
    let spans: Vec<Span> = word
        .letters()
        .iter()
        .flat_map(|l| {
            [
                Span::styled(format!(" {} ", l.character()), status_style(l.status())),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn placeholder_line(text: &str, word_length: usize) -> Line<'static> {
    let mut chars = text.chars();
    let spans: Vec<Span> = (0..word_length)
        .flat_map(|_| {
            let cell = chars.next().map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
            [
                Span::styled(cell, Style::default().fg(Color::Gray)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 POLYWORDIC 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<W: WordSource>(f: &mut Frame, app: &App<W>, session: Option<&GameSession>, area: Rect) {
    let word_length = app.word_length();
    let mut lines = vec![Line::from("")];

    if let Some(session) = session {
        for guess in session.guess_history() {
            lines.push(word_line(guess));
            lines.push(Line::from(""));
        }
        for row in session.current_attempt()..session.max_attempts() {
            let text = if row == session.current_attempt() && !session.is_game_over() {
                app.input_buffer.as_str()
            } else {
                ""
            };
            lines.push(placeholder_line(text, word_length));
            lines.push(Line::from(""));
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", app.difficulty))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<W: WordSource>(
    f: &mut Frame,
    app: &App<W>,
    session: Option<&GameSession>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let keyboard = session.map(GameSession::aggregate_statuses).unwrap_or_default();
    render_keyboard(f, &keyboard, chunks[0]);
    render_attempts(f, session, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardStatus, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| Span::styled(format!(" {c} "), status_style(keyboard.get(c))))
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, session: Option<&GameSession>, area: Rect) {
    let (used, max) = session.map_or((0, 1), |s| (s.current_attempt(), s.max_attempts()));
    let percent = u16::try_from(used * 100 / max.max(1)).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_messages<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 'n' new game | 'q' quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(" Enter a {}-letter word ", app.word_length()),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("Enter: Submit | Ctrl-N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Difficulty;
    use crate::service::GameService;
    use crate::wordlists::WordRepository;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_keyboard() {
        let words = WordRepository::from_words(["apple", "house"], 5);
        let service = GameService::with_rng(words, StdRng::seed_from_u64(3));
        let mut app = App::new(service, Difficulty::Hard).unwrap();
        for c in "house".chars() {
            app.push_char(c);
        }
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("POLYWORDIC"));
        assert!(text.contains("HARD"));
        assert!(text.contains(" H "));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("1/4 used"));
    }
}
