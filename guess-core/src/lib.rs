//! Guess-my-number game engine.
//!
//! This crate provides:
//! - Guess evaluation as pure decision logic (`rules`)
//! - A controller that owns the secret, score and highscore
//! - A `Presenter` render contract for frontends
//! - A headless interface and testing utilities
//!
//! # Quick Start
//!
//! ```
//! use guess_core::{FixedSecret, GameConfig, GameController, GuessOutcome, NullPresenter};
//!
//! let mut game = GameController::with_source(FixedSecret::new(14), &GameConfig::default());
//!
//! assert_eq!(game.check_guess("20", &mut NullPresenter), Ok(GuessOutcome::TooHigh));
//! assert_eq!(game.state().score(), 19);
//!
//! assert_eq!(game.check_guess("14", &mut NullPresenter), Ok(GuessOutcome::Correct));
//! assert_eq!(game.state().highscore(), 19);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod headless;
pub mod render;
pub mod rules;
pub mod secret;
pub mod state;
pub mod testing;

// Primary public API
pub use config::GameConfig;
pub use controller::GameController;
pub use error::GameError;
pub use headless::{GuessResponse, HeadlessGame, TranscriptEntry};
pub use render::{NullPresenter, Presenter};
pub use rules::{Effect, GuessOutcome};
pub use secret::{FixedSecret, RandomSecret, SecretSource};
pub use state::{GameSnapshot, GameState, Phase, MAX_SECRET, MIN_SECRET, STARTING_SCORE};
