//! TUI application state and logic

use super::rendering::ui;
use crate::core::{GuessOutcome, Phase};
use crate::game::{Game, SelectorType};
use crate::output::display::{LOSS_MESSAGE, WIN_MESSAGE, describe_outcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, SelectorType>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing letters into the current round
    Guessing,
    /// Round finished, waiting for "play again" or quit
    RoundOver,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a, SelectorType>) -> Self {
        Self {
            game,
            messages: vec![
                Message {
                    text: "Bem-vindo! Adivinhe a palavra, uma letra por vez.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Digite uma letra e pressione Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.game.state().is_game_over() {
            InputMode::RoundOver
        } else {
            InputMode::Guessing
        }
    }

    /// Submit the typed letter
    pub fn submit(&mut self) {
        let guess = self.game.state().pending_guess().to_string();
        let outcome = self.game.submit_guess(&guess);

        let style = match outcome {
            GuessOutcome::Correct { .. } => MessageStyle::Success,
            GuessOutcome::Repeated | GuessOutcome::Ignored => MessageStyle::Info,
            GuessOutcome::Wrong => MessageStyle::Error,
        };
        self.add_message(&describe_outcome(&guess, &outcome), style);

        match self.game.state().phase() {
            Phase::Won => {
                self.add_message(WIN_MESSAGE, MessageStyle::Success);
                self.add_message("Enter: jogar novamente | q: sair", MessageStyle::Info);
            }
            Phase::Lost => {
                self.add_message(LOSS_MESSAGE, MessageStyle::Error);
                self.add_message("Enter: jogar novamente | q: sair", MessageStyle::Info);
            }
            Phase::Playing => {}
        }
    }

    /// Start a new round on the next word
    pub fn restart(&mut self) {
        self.game.restart();
        self.messages.clear();
        self.add_message("Nova rodada! Boa sorte.", MessageStyle::Info);
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

        match self.input_mode() {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.restart(),
                KeyCode::Char(c) if c.is_alphabetic() => {
                    // One letter at a time: typing replaces the pending letter
                    self.game.set_pending(&c.to_string());
                }
                KeyCode::Backspace => {
                    self.game.pop_pending();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n' | 'j') => self.restart(),
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
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            debug!(stats = ?app.game.stats(), "leaving TUI");
            break;
        }
    }

    Ok(())
}
