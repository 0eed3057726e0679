//! TUI application state and logic

use crate::core::{Code, Color};
use crate::game::{GameSession, GameStatus, GuessOutcome, Statistics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{Rng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info, warn};

/// Application state
pub struct App<R = StdRng> {
    pub session: GameSession<R>,
    /// Guess being composed, one color per slot
    pub selection: Vec<Color>,
    /// Slot the next color key applies to
    pub cursor: usize,
    pub last_outcome: Option<GuessOutcome>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: GameSession<R>) -> Self {
        let selection = vec![Color::new(0); session.config().code_length()];
        let mut app = Self {
            session,
            selection,
            cursor: 0,
            last_outcome: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Pick a color for each slot and press Enter to guess.",
            MessageStyle::Info,
        );
        app
    }

    /// Whether the current game has been won or lost
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.session.status().is_over()
    }

    /// The guess currently being composed
    #[must_use]
    pub fn current_code(&self) -> Code {
        Code::new(self.selection.clone())
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let n = self.selection.len();
        self.cursor = if forward {
            (self.cursor + 1) % n
        } else {
            (self.cursor + n - 1) % n
        };
    }

    /// Step the color under the cursor through the palette
    pub fn cycle_color(&mut self, forward: bool) {
        let size = self.session.config().palette().len();
        let current = self.selection[self.cursor].index();
        let next = if forward {
            (current + 1) % size
        } else {
            (current + size - 1) % size
        };
        self.selection[self.cursor] = Color::new(next as u8);
    }

    /// Set the slot under the cursor by color initial and advance
    ///
    /// Returns `false` if no palette color has that initial.
    pub fn pick_color(&mut self, initial: char) -> bool {
        match self.session.config().palette().by_initial(initial) {
            Some(color) => {
                self.selection[self.cursor] = color;
                if self.cursor + 1 < self.selection.len() {
                    self.cursor += 1;
                }
                true
            }
            None => false,
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = self.current_code();
        match self.session.submit_guess(&guess) {
            Ok(outcome) => {
                let n = self.session.config().code_length();
                match outcome.status {
                    GameStatus::InProgress => {
                        let text = format!(
                            "{} exact, {} misplaced. {} attempts left.",
                            outcome.score.exact_matches(),
                            outcome.score.color_matches(),
                            outcome.attempts_left
                        );
                        self.add_message(&text, MessageStyle::Info);
                    }
                    GameStatus::Won => {
                        let used = self.session.attempts_used();
                        self.stats.record(GameStatus::Won, used);
                        let celebration = match used {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                            2..=3 => format!("🔥 MAGNIFICENT! Cracked in {used}! 🔥"),
                            _ => format!("🎉 Code broken in {used} attempts! 🎉"),
                        };
                        self.add_message(&celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        self.stats.record(GameStatus::Lost, self.session.attempts_used());
                        let secret = outcome
                            .revealed_secret
                            .as_ref()
                            .map(|s| self.session.config().palette().describe(s))
                            .unwrap_or_default();
                        self.add_message(
                            &format!("Game over! The secret code was {secret}"),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                }
                debug!(exact = outcome.score.exact_matches(), slots = n, "guess submitted");
                self.last_outcome = Some(outcome);
            }
            Err(e) => {
                warn!(error = %e, "guess rejected");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.selection.fill(Color::new(0));
        self.cursor = 0;
        self.last_outcome = None;
        self.messages.clear();
        self.add_message("New game started! A fresh secret is hidden.", MessageStyle::Info);
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            _ if self.game_over() => {
                if key.code == KeyCode::Enter {
                    self.new_game();
                }
            }
            KeyCode::Left | KeyCode::BackTab | KeyCode::Backspace => self.move_cursor(false),
            KeyCode::Right | KeyCode::Tab => self.move_cursor(true),
            KeyCode::Up => self.cycle_color(true),
            KeyCode::Down => self.cycle_color(false),
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Char(c) => {
                if !self.pick_color(c) {
                    self.add_message(&format!("No color starts with '{c}'"), MessageStyle::Error);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("TUI started");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    let restored = restore_terminal(&mut terminal);

    info!("TUI stopped");
    first_error(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Report the event loop's error ahead of any cleanup error
fn first_error(run: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &run {
        warn!(error = %err, "TUI event loop failed");
    }
    run.and(restored)
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, generate_secret};
    use rand::SeedableRng;

    const SEED: u64 = 11;

    #[test]
    fn event_loop_error_is_returned() {
        let failed = first_error(Err(anyhow::anyhow!("read failed")), Ok(()));
        assert_eq!(failed.unwrap_err().to_string(), "read failed");

        let both = first_error(
            Err(anyhow::anyhow!("read failed")),
            Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(both.unwrap_err().to_string(), "read failed");

        let cleanup = first_error(Ok(()), Err(anyhow::anyhow!("restore failed")));
        assert!(cleanup.is_err());
        assert!(first_error(Ok(()), Ok(())).is_ok());
    }

    fn app(config: GameConfig) -> App {
        App::new(GameSession::seeded(config, SEED).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_code(app: &mut App, code: &Code) {
        let palette = app.session.config().palette().clone();
        for &color in code {
            let initial = palette.name(color).unwrap().chars().next().unwrap();
            press(app, KeyCode::Char(initial.to_ascii_lowercase()));
        }
    }

    fn secret(config: &GameConfig) -> Code {
        generate_secret(
            config.palette(),
            config.code_length(),
            &mut StdRng::seed_from_u64(SEED),
        )
        .unwrap()
    }

    #[test]
    fn starts_with_first_color_everywhere() {
        let app = app(GameConfig::default());
        assert_eq!(app.current_code(), Code::from_indices([0, 0, 0, 0]));
        assert_eq!(app.cursor, 0);
        assert!(!app.game_over());
    }

    #[test]
    fn cursor_wraps() {
        let mut app = app(GameConfig::default());
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 3);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn arrows_cycle_colors() {
        let mut app = app(GameConfig::default());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selection[0], Color::new(5));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selection[0], Color::new(1));
    }

    #[test]
    fn initials_fill_slots_in_order() {
        let mut app = app(GameConfig::default());
        type_code(&mut app, &Code::from_indices([3, 2, 1, 0]));
        assert_eq!(app.current_code(), Code::from_indices([3, 2, 1, 0]));
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn unknown_initial_reports_error() {
        let mut app = app(GameConfig::default());
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.current_code(), Code::from_indices([0, 0, 0, 0]));
    }

    #[test]
    fn winning_guess_updates_stats() {
        let config = GameConfig::default();
        let answer = secret(&config);
        let mut app = app(config);

        type_code(&mut app, &answer);
        press(&mut app, KeyCode::Enter);

        assert!(app.game_over());
        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.win_distribution[1], 1);
    }

    #[test]
    fn losing_reveals_secret_in_messages() {
        let config = GameConfig::default().with_starting_attempts(1);
        let answer = secret(&config);
        let mut app = app(config);
        let palette = app.session.config().palette().clone();
        let missing = palette.colors().find(|c| !answer.iter().any(|s| s == c)).unwrap();
        app.selection.fill(missing);

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.status(), GameStatus::Lost);
        assert_eq!(app.stats.games_played, 1);
        let described = palette.describe(&answer);
        assert!(app.messages.iter().any(|m| m.text.contains(&described)));
    }

    #[test]
    fn keys_ignored_after_game_over_except_new_game() {
        let config = GameConfig::default();
        let answer = secret(&config);
        let mut app = app(config);
        type_code(&mut app, &answer);
        press(&mut app, KeyCode::Enter);
        let before = app.current_code();

        press(&mut app, KeyCode::Up);
        assert_eq!(app.current_code(), before);

        press(&mut app, KeyCode::Enter);
        assert!(!app.game_over());
        assert_eq!(app.session.attempts_left(), 10);
        assert_eq!(app.current_code(), Code::from_indices([0, 0, 0, 0]));
    }

    #[test]
    fn quit_keys() {
        let mut app = app(GameConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app2 = self::app(GameConfig::default());
        app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app(GameConfig::default());
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
