//! Headless game interface for programmatic use.
//!
//! This module provides a simplified interface for playing without a TUI.
//! It's designed for:
//! - Scripted sessions piped through stdin
//! - Automated testing
//!
//! # Example
//!
//! ```
//! use guess_core::{GameConfig, GuessOutcome, HeadlessGame};
//!
//! let mut game = HeadlessGame::new(&GameConfig::new().with_seed(7));
//!
//! let response = game.send("10").unwrap();
//! if response.outcome != GuessOutcome::Correct {
//!     assert_eq!(game.score(), 19);
//! }
//!
//! game.again();
//! assert_eq!(game.score(), 20);
//! ```

use crate::config::GameConfig;
use crate::controller::GameController;
use crate::error::GameError;
use crate::render::NullPresenter;
use crate::rules::GuessOutcome;
use crate::secret::SecretSource;
use crate::state::{GameSnapshot, Phase};

/// A simplified response from the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResponse {
    /// How the guess was classified.
    pub outcome: GuessOutcome,
    /// The message shown to the player.
    pub message: String,
    /// Score after the guess.
    pub score: u8,
    /// Highscore after the guess.
    pub highscore: u8,
    /// The secret, once revealed by a win.
    pub revealed: Option<u8>,
}

/// An entry in the game transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Raw player input.
    pub input: String,
    /// Outcome of the guess.
    pub outcome: GuessOutcome,
    /// Score after the guess.
    pub score: u8,
    /// Round number, starting at 1.
    pub round: u32,
}

/// A game that can be controlled programmatically.
#[derive(Debug)]
pub struct HeadlessGame {
    game: GameController,
    transcript: Vec<TranscriptEntry>,
    round: u32,
}

impl HeadlessGame {
    /// Create a new headless game with the given configuration.
    pub fn new(config: &GameConfig) -> Self {
        Self::from_controller(GameController::new(config))
    }

    /// Create a headless game with an explicit secret source.
    pub fn with_source(source: impl SecretSource + 'static, config: &GameConfig) -> Self {
        Self::from_controller(GameController::with_source(source, config))
    }

    fn from_controller(game: GameController) -> Self {
        Self {
            game,
            transcript: Vec::new(),
            round: 1,
        }
    }

    /// Submit a guess and get a response.
    pub fn send(&mut self, input: &str) -> Result<GuessResponse, GameError> {
        let outcome = self.game.check_guess(input, &mut NullPresenter)?;
        let state = self.game.state();

        self.transcript.push(TranscriptEntry {
            input: input.to_string(),
            outcome,
            score: state.score(),
            round: self.round,
        });

        Ok(GuessResponse {
            outcome,
            message: self.game.message().to_string(),
            score: state.score(),
            highscore: state.highscore(),
            revealed: state.is_revealed().then_some(state.secret()),
        })
    }

    /// Start a new round.
    pub fn again(&mut self) {
        self.game.reset_game(&mut NullPresenter);
        self.round += 1;
    }

    // ========================================================================
    // Game State Queries
    // ========================================================================

    pub fn score(&self) -> u8 {
        self.game.state().score()
    }

    pub fn highscore(&self) -> u8 {
        self.game.state().highscore()
    }

    pub fn phase(&self) -> Phase {
        self.game.state().phase()
    }

    /// The message currently shown.
    pub fn message(&self) -> &str {
        self.game.message()
    }

    /// Current round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Serializable view of the session.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.state().snapshot()
    }

    /// The snapshot as a JSON string.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    /// All guesses submitted this session.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Guesses submitted in the current round.
    pub fn guesses_this_round(&self) -> usize {
        self.transcript
            .iter()
            .filter(|e| e.round == self.round)
            .count()
    }

    /// Get the underlying controller for advanced use.
    pub fn controller(&self) -> &GameController {
        &self.game
    }
}
