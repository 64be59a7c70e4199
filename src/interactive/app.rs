//! TUI application state and logic

use crate::config::AppConfig;
use crate::core::{HexDigit, Secret};
use crate::engine::{GuessEngine, Key, Outcome, ROWS, Snapshot};
use crate::solver::{Solver, StrategyType, history_from_grid};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a pressed on-screen key stays highlighted
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(100);

/// Event poll interval; bounds how late a highlight can expire
const TICK: Duration = Duration::from_millis(25);

/// Application state
pub struct App {
    pub engine: GuessEngine,
    pub solver: Solver<StrategyType>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub highlight: Option<KeyHighlight>,
    pub should_quit: bool,
    /// Set once the current game's result is counted in `stats`
    recorded: bool,
}

/// Presentation-only: the on-screen key that was just pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHighlight {
    pub symbol: char,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = rows used by a won game (1-6)
    pub guess_distribution: [usize; ROWS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_engine(config.engine(), config.solver())
    }

    #[must_use]
    pub fn with_engine(engine: GuessEngine, solver: Solver<StrategyType>) -> Self {
        Self {
            engine,
            solver,
            messages: vec![
                Message {
                    text: "Guess the color of the title in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type 0-9 a-f, Enter to submit, ? for a hint.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            highlight: None,
            should_quit: false,
            recorded: false,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Feed one game key to the engine and react to a finished game
    pub fn press(&mut self, key: Key, now: Instant) {
        if let Key::Char(symbol) = key
            && HexDigit::from_char(symbol).is_some()
        {
            self.highlight = Some(KeyHighlight {
                symbol,
                expires_at: now + HIGHLIGHT_DURATION,
            });
        }

        let row = self.engine.cursor().row;
        let snapshot = self.engine.handle_key(key);

        if key == Key::Enter && !snapshot.outcome.is_terminal() && !snapshot.grid.is_row_full(row)
        {
            self.add_message("Fill all six digits first", MessageStyle::Error);
        }

        if snapshot.outcome.is_terminal() && !self.recorded {
            self.record_result(snapshot.outcome);
        }
    }

    fn record_result(&mut self, outcome: Outcome) {
        self.recorded = true;
        self.stats.total_games += 1;

        let secret = self
            .engine
            .revealed_secret()
            .map(ToString::to_string)
            .unwrap_or_default();

        if outcome == Outcome::Won {
            let attempts = self.engine.attempts();
            self.stats.games_won += 1;
            if attempts <= ROWS {
                self.stats.guess_distribution[attempts] += 1;
            }
            self.add_message(
                &format!("You win! The hex was #{secret}."),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("You lose! The hex was #{secret}."),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.engine.reset();
        self.recorded = false;
        self.highlight = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Suggest the next guess from the submitted rows
    pub fn show_hint(&mut self) {
        if self.engine.outcome().is_terminal() {
            return;
        }
        let history = history_from_grid(self.engine.grid());
        match self.solver.next_guess(&history) {
            Some(guess) => {
                let text = format!(
                    "Hint: try {} ({} codes possible)",
                    Secret::new(guess),
                    self.solver.count_candidates(&history)
                );
                self.add_message(&text, MessageStyle::Info);
            }
            None => self.add_message("No consistent code remains", MessageStyle::Error),
        }
    }

    /// Drop an expired key highlight
    pub fn tick(&mut self, now: Instant) {
        if self.highlight.is_some_and(|h| now >= h.expires_at) {
            self.highlight = None;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Handle a key event from the terminal
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        if self.engine.outcome().is_terminal() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_hint(),
            KeyCode::Char(c) => self.press(Key::Char(c.to_ascii_lowercase()), now),
            KeyCode::Backspace => self.press(Key::Backspace, now),
            KeyCode::Enter => self.press(Key::Enter, now),
            KeyCode::Left => self.press(Key::Left, now),
            KeyCode::Right => self.press(Key::Right, now),
            _ => {}
        }
    }

    /// Handle a click on the on-screen keyboard
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, screen: Rect, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.engine.outcome().is_terminal() {
            return;
        }

        let clicked = super::rendering::keyboard_buttons(screen)
            .into_iter()
            .find(|(area, _)| {
                area.contains(ratatui::layout::Position::new(mouse.column, mouse.row))
            });

        if let Some((_, key)) = clicked {
            debug!(?key, "On-screen key clicked");
            self.press(key, now);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key, Instant::now());
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    app.handle_mouse_event(mouse, screen, Instant::now());
                }
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BisectStrategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(secret: &str) -> App {
        let engine = GuessEngine::with_secret(secret.parse().unwrap(), StdRng::seed_from_u64(4));
        App::with_engine(engine, Solver::new(StrategyType::Bisect(BisectStrategy)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)), now);
        }
        app.handle_key_event(key(KeyCode::Enter), now);
    }

    #[test]
    fn uppercase_keys_are_lowercased() {
        let mut app = app("abcdef");
        let now = Instant::now();
        type_line(&mut app, "ABCDEF", now);
        assert_eq!(app.engine.outcome(), Outcome::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn highlight_expires_after_duration() {
        let mut app = app("abcdef");
        let now = Instant::now();
        app.handle_key_event(key(KeyCode::Char('a')), now);
        assert_eq!(app.highlight.map(|h| h.symbol), Some('a'));

        app.tick(now + HIGHLIGHT_DURATION / 2);
        assert!(app.highlight.is_some());

        app.tick(now + HIGHLIGHT_DURATION);
        assert!(app.highlight.is_none());
    }

    #[test]
    fn highlight_does_not_touch_game_state() {
        let mut app = app("abcdef");
        let now = Instant::now();
        app.handle_key_event(key(KeyCode::Char('5')), now);
        let before = app.snapshot();
        app.tick(now + HIGHLIGHT_DURATION * 2);
        assert_eq!(app.snapshot(), before);
    }

    #[test]
    fn non_hex_keys_do_not_highlight() {
        let mut app = app("abcdef");
        app.handle_key_event(key(KeyCode::Char('z')), Instant::now());
        assert!(app.highlight.is_none());
        assert_eq!(app.snapshot().cursor.column, 0);
    }

    #[test]
    fn loss_is_recorded_once() {
        let mut app = app("ffffff");
        let now = Instant::now();
        for _ in 0..ROWS {
            type_line(&mut app, "000000", now);
        }
        assert_eq!(app.engine.outcome(), Outcome::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "You lose! The hex was #ffffff.")
        );

        // Enter after the game starts a new one instead of re-recording
        app.handle_key_event(key(KeyCode::Enter), now);
        assert_eq!(app.engine.outcome(), Outcome::InProgress);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn incomplete_submit_warns() {
        let mut app = app("abcdef");
        type_line(&mut app, "abc", Instant::now());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
        assert_eq!(app.snapshot().cursor.row, 0);
    }

    #[test]
    fn hint_adds_message() {
        let mut app = app("abcdef");
        app.handle_key_event(key(KeyCode::Char('?')), Instant::now());
        assert!(
            app.messages
                .last()
                .is_some_and(|m| m.text.starts_with("Hint: try 777777"))
        );
    }

    #[test]
    fn quit_keys() {
        let mut app = app("abcdef");
        app.handle_key_event(key(KeyCode::Char('q')), Instant::now());
        // 'q' is just an ignored key while playing
        assert!(!app.should_quit);

        app.handle_key_event(key(KeyCode::Esc), Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn clicking_on_screen_keys() {
        let mut app = app("abcdef");
        let screen = Rect::new(0, 0, 80, 40);
        let now = Instant::now();

        let buttons = crate::interactive::rendering::keyboard_buttons(screen);
        let (area, pressed) = buttons[0];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x,
            row: area.y,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse_event(click, screen, now);

        assert_eq!(pressed, Key::Char('0'));
        assert_eq!(app.snapshot().cursor.column, 1);
        assert_eq!(app.highlight.map(|h| h.symbol), Some('0'));
    }
}
