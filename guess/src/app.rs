//! Main application state and logic

use guess_core::rules::MSG_START;
use guess_core::{GameConfig, GameController, GuessOutcome, Presenter, STARTING_SCORE};
use tracing::debug;

use crate::ui::theme::GameTheme;
use crate::ui::Overlay;

/// Longest guess the input field accepts, in characters.
const MAX_INPUT_CHARS: usize = 12;

/// The guess entry field.
#[derive(Debug, Clone, Default)]
pub struct GuessInput {
    buffer: String,
    cursor_position: usize,
}

impl GuessInput {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Characters a numeric field accepts.
    pub fn accepts(c: char) -> bool {
        c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
    }

    /// Insert a character at the cursor. Non-numeric characters are ignored.
    pub fn type_char(&mut self, c: char) -> bool {
        if !Self::accepts(c) || self.buffer.chars().count() >= MAX_INPUT_CHARS {
            return false;
        }
        let byte_pos = self
            .buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len());
        self.buffer.insert(byte_pos, c);
        self.cursor_position += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            if let Some((byte_pos, ch)) = self.buffer.char_indices().nth(self.cursor_position) {
                self.buffer.replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    pub fn delete(&mut self) {
        if let Some((byte_pos, ch)) = self.buffer.char_indices().nth(self.cursor_position) {
            self.buffer.replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_position = self.buffer.chars().count();
    }

    /// Spinner step, like the arrows on a number field. Empty input steps
    /// from zero; input that is not a whole number is left alone.
    pub fn step(&mut self, delta: i64) {
        let current = if self.buffer.trim().is_empty() {
            0
        } else {
            match self.buffer.trim().parse::<i64>() {
                Ok(value) => value,
                Err(_) => return,
            }
        };
        self.set(current.saturating_add(delta).to_string());
    }

    pub fn set(&mut self, content: impl Into<String>) {
        self.buffer = content.into();
        self.cursor_end();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }
}

/// Everything the player sees. Updated only through [`Presenter`].
#[derive(Debug, Clone)]
pub struct Screen {
    pub message: String,
    pub score: u8,
    pub highscore: u8,
    pub secret: Option<u8>,
    pub won: bool,
    pub input: GuessInput,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            message: MSG_START.to_string(),
            score: STARTING_SCORE,
            highscore: 0,
            secret: None,
            won: false,
            input: GuessInput::default(),
        }
    }
}

impl Presenter for Screen {
    fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
    }

    fn set_score(&mut self, score: u8) {
        self.score = score;
    }

    fn set_highscore(&mut self, highscore: u8) {
        self.highscore = highscore;
    }

    fn reveal_secret(&mut self, secret: u8) {
        self.secret = Some(secret);
    }

    fn hide_secret(&mut self) {
        self.secret = None;
    }

    fn clear_guess_input(&mut self) {
        self.input.clear();
    }

    fn apply_win_style(&mut self) {
        self.won = true;
    }

    fn apply_neutral_style(&mut self) {
        self.won = false;
    }
}

/// Main application state
pub struct App {
    game: GameController,
    pub screen: Screen,
    pub theme: GameTheme,
    overlay: Option<Overlay>,
    status_message: Option<String>,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_controller(GameController::new(config))
    }

    pub fn with_controller(game: GameController) -> Self {
        let mut screen = Screen::default();
        game.render(&mut screen);
        Self {
            game,
            screen,
            theme: GameTheme::default(),
            overlay: None,
            status_message: None,
        }
    }

    /// "Check!": evaluate whatever is in the guess field.
    pub fn check(&mut self) -> Option<GuessOutcome> {
        let raw = self.screen.input.text().to_string();
        match self.game.check_guess(&raw, &mut self.screen) {
            Ok(outcome) => {
                debug!(%outcome, input = %raw, "checked");
                self.clear_status();
                Some(outcome)
            }
            Err(e) => {
                self.set_status(e.to_string());
                None
            }
        }
    }

    /// "Again!": start a new round.
    pub fn again(&mut self) {
        self.game.reset_game(&mut self.screen);
        self.clear_status();
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Some(Overlay::Help) => None,
            None => Some(Overlay::Help),
        };
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
