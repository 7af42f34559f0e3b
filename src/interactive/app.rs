//! TUI application state and logic

use crate::core::{Game, GameError, WORD_LENGTH, Word};
use crate::output::KeyboardHints;
use crate::wordlists::choose_secret;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub game: Game,
    pub input_buffer: String,
    pub hints: KeyboardHints,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [Word], game: Game) -> Self {
        Self {
            words,
            game,
            input_buffer: String::new(),
            hints: KeyboardHints::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden five-letter word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Add a letter to the current guess
    pub fn push_letter(&mut self, letter: char) {
        if self.game.is_over() || self.input_buffer.len() >= WORD_LENGTH {
            return;
        }
        if letter.is_ascii_alphabetic() {
            self.input_buffer.push(letter.to_ascii_lowercase());
        }
    }

    /// Remove the last letter from the current guess
    pub fn delete_letter(&mut self) {
        if self.game.is_over() {
            return;
        }
        self.input_buffer.pop();
    }

    /// Submit the current guess for evaluation
    pub fn submit_guess(&mut self) {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message("Your word must have 5 letters!", MessageStyle::Error);
            return;
        }

        let guess = self.input_buffer.clone();
        match self.game.evaluate(&guess) {
            Ok(feedback) => {
                self.hints.observe(&feedback);
                self.input_buffer.clear();

                if self.game.is_win() {
                    let celebration = match self.game.guesses_made() {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it in six! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    self.input_mode = InputMode::RoundOver;
                } else if self.game.is_over() {
                    let reveal =
                        format!("The word was: {}", self.game.secret().text().to_uppercase());
                    self.add_message(&reveal, MessageStyle::Error);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    self.input_mode = InputMode::RoundOver;
                } else {
                    let remaining = self.game.guesses_remaining();
                    self.add_message(
                        &format!(
                            "{remaining} {} remaining",
                            if remaining == 1 { "guess" } else { "guesses" }
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(err @ GameError::InvalidGuess(_)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(GameError::GameOver) => {
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::RoundOver;
            }
        }
    }

    /// Start a fresh round with a new random secret
    pub fn new_game(&mut self) {
        let Some(secret) = choose_secret(self.words) else {
            self.add_message("No words available for a new round!", MessageStyle::Error);
            return;
        };

        self.game = Game::new(secret);
        self.input_buffer.clear();
        self.hints = KeyboardHints::new();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Good luck.", MessageStyle::Info);
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

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Round settled; ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.delete_letter();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
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
    use crate::core::MAX_GUESSES;
    use crate::wordlists::loader::words_from_slice;

    fn app_with_secret<'a>(words: &'a [Word], secret: &str) -> App<'a> {
        App::new(words, Game::new(Word::new(secret).unwrap()))
    }

    #[test]
    fn typing_fills_the_buffer_up_to_five_letters() {
        let words = words_from_slice(&["crane"]);
        let mut app = app_with_secret(&words, "crane");

        for c in "slates".chars() {
            app.push_letter(c);
        }

        assert_eq!(app.input_buffer, "slate");

        app.delete_letter();
        assert_eq!(app.input_buffer, "slat");
    }

    #[test]
    fn non_letters_are_ignored() {
        let words = words_from_slice(&["crane"]);
        let mut app = app_with_secret(&words, "crane");

        app.push_letter('3');
        app.push_letter('!');
        app.push_letter('s');

        assert_eq!(app.input_buffer, "s");
    }

    #[test]
    fn short_guess_is_not_submitted() {
        let words = words_from_slice(&["crane"]);
        let mut app = app_with_secret(&words, "crane");

        app.push_letter('s');
        app.submit_guess();

        assert_eq!(app.game.guesses_made(), 0);
        assert_eq!(app.input_buffer, "s");
    }

    #[test]
    fn winning_guess_ends_the_round() {
        let words = words_from_slice(&["crane"]);
        let mut app = app_with_secret(&words, "crane");

        for c in "crane".chars() {
            app.push_letter(c);
        }
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.game.is_win());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn sixth_miss_reveals_the_secret() {
        let words = words_from_slice(&["crane"]);
        let mut app = app_with_secret(&words, "crane");

        for _ in 0..MAX_GUESSES {
            for c in "slate".chars() {
                app.push_letter(c);
            }
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(!app.game.is_win());
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
    }

    #[test]
    fn typing_after_round_over_is_ignored() {
        let words = words_from_slice(&["crane"]);
        let mut app = app_with_secret(&words, "crane");

        for c in "crane".chars() {
            app.push_letter(c);
        }
        app.submit_guess();
        app.push_letter('s');

        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn new_game_resets_the_session() {
        let words = words_from_slice(&["slate"]);
        let mut app = app_with_secret(&words, "crane");

        for c in "crane".chars() {
            app.push_letter(c);
        }
        app.submit_guess();
        app.new_game();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.guesses_made(), 0);
        assert_eq!(app.game.secret().text(), "slate");
        assert!(!app.game.is_over());
    }

    #[test]
    fn messages_are_capped_at_five() {
        let words = words_from_slice(&["crane"]);
        let mut app = app_with_secret(&words, "crane");

        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), 5);
    }
}
