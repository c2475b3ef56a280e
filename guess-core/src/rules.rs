//! Rules engine for guess evaluation.
//!
//! Evaluation is split in two steps: [`evaluate`] decides what a guess means
//! and returns the [`Effect`]s it causes, then [`apply_effects`] commits them
//! to the [`GameState`]. Frontends see the same effects through
//! [`crate::render::present_effects`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::{GameState, Phase, STARTING_SCORE};

pub const MSG_NO_NUMBER: &str = "⛔️ No number!";
pub const MSG_CORRECT: &str = "🎉 Correct Number!";
pub const MSG_TOO_HIGH: &str = "📈 Too high!";
pub const MSG_TOO_LOW: &str = "📉 Too low!";
pub const MSG_LOST: &str = "💥 You lost the game!";
pub const MSG_START: &str = "Start guessing...";

/// A coerced guess: finite and non-zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Guess(f64);

impl Guess {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coerce raw text from the guess field into a number.
///
/// Surrounding whitespace is ignored. Empty, unparsable, non-finite and zero
/// inputs all yield `None`; zero is treated the same as "nothing entered".
pub fn coerce_guess(raw: &str) -> Option<Guess> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value == 0.0 {
        return None;
    }

    Some(Guess(value))
}

/// Classification of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Invalid,
    TooHigh,
    TooLow,
    Correct,
    Lost,
}

impl GuessOutcome {
    /// Message shown to the player for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            GuessOutcome::Invalid => MSG_NO_NUMBER,
            GuessOutcome::TooHigh => MSG_TOO_HIGH,
            GuessOutcome::TooLow => MSG_TOO_LOW,
            GuessOutcome::Correct => MSG_CORRECT,
            GuessOutcome::Lost => MSG_LOST,
        }
    }

    /// Whether this outcome ends the round.
    pub fn ends_round(self) -> bool {
        matches!(self, GuessOutcome::Correct | GuessOutcome::Lost)
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GuessOutcome::Invalid => "invalid",
            GuessOutcome::TooHigh => "too high",
            GuessOutcome::TooLow => "too low",
            GuessOutcome::Correct => "correct",
            GuessOutcome::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// The result of evaluating one guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub outcome: GuessOutcome,
    pub effects: Vec<Effect>,
}

impl Resolution {
    pub fn new(outcome: GuessOutcome) -> Self {
        Self {
            outcome,
            effects: vec![Effect::Message {
                text: outcome.message().to_string(),
            }],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// A concrete change to game state or to what the player sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a message to the player.
    Message { text: String },
    /// Score changed.
    ScoreChanged { new_score: u8 },
    /// A new best score was set.
    HighscoreChanged { new_highscore: u8 },
    /// Secret shown to the player.
    SecretRevealed { secret: u8 },
    /// Secret hidden again.
    SecretHidden,
    /// Guess input emptied.
    GuessInputCleared,
    /// Celebrate a win.
    WinStyle,
    /// Back to the default look.
    NeutralStyle,
    /// The round was decided. Emitted once per round.
    RoundEnded { won: bool },
    /// A new round begins around this secret.
    RoundStarted { secret: u8 },
}

/// Decide what a guess means without touching state.
///
/// Checks run in a fixed order: missing input, exact match, then a wrong
/// guess that either costs a point or, on the last point, loses the round.
pub fn evaluate(state: &GameState, guess: Option<Guess>) -> Resolution {
    let Some(guess) = guess else {
        return Resolution::new(GuessOutcome::Invalid);
    };

    let secret = f64::from(state.secret());
    let first_decision = state.phase() == Phase::Playing;

    if guess.value() == secret {
        let mut resolution = Resolution::new(GuessOutcome::Correct).with_effects([
            Effect::SecretRevealed {
                secret: state.secret(),
            },
            Effect::WinStyle,
        ]);
        if state.score() > state.highscore() {
            resolution = resolution.with_effect(Effect::HighscoreChanged {
                new_highscore: state.score(),
            });
        }
        if first_decision {
            resolution = resolution.with_effect(Effect::RoundEnded { won: true });
        }
        return resolution;
    }

    if state.score() > 1 {
        let outcome = if guess.value() > secret {
            GuessOutcome::TooHigh
        } else {
            GuessOutcome::TooLow
        };
        return Resolution::new(outcome).with_effect(Effect::ScoreChanged {
            new_score: state.score() - 1,
        });
    }

    let mut resolution =
        Resolution::new(GuessOutcome::Lost).with_effect(Effect::ScoreChanged { new_score: 0 });
    if first_decision {
        resolution = resolution.with_effect(Effect::RoundEnded { won: false });
    }
    resolution
}

/// Effects that start a new round around `secret`.
pub fn new_round_effects(secret: u8) -> Vec<Effect> {
    vec![
        Effect::RoundStarted { secret },
        Effect::Message {
            text: MSG_START.to_string(),
        },
        Effect::ScoreChanged {
            new_score: STARTING_SCORE,
        },
        Effect::SecretHidden,
        Effect::GuessInputCleared,
        Effect::NeutralStyle,
    ]
}

/// Apply a list of effects to the game state.
pub fn apply_effects(state: &mut GameState, effects: &[Effect]) {
    for effect in effects {
        apply_effect(state, effect);
    }
}

/// Apply a single effect to the game state.
pub fn apply_effect(state: &mut GameState, effect: &Effect) {
    match effect {
        Effect::ScoreChanged { new_score } => {
            state.score = *new_score;
        }
        Effect::HighscoreChanged { new_highscore } => {
            state.highscore = state.highscore.max(*new_highscore);
        }
        Effect::SecretRevealed { .. } => {
            state.revealed = true;
        }
        Effect::SecretHidden => {
            state.revealed = false;
        }
        Effect::RoundEnded { won } => {
            state.phase = Phase::RoundOver;
            state.rounds_played += 1;
            if *won {
                state.rounds_won += 1;
            }
        }
        Effect::RoundStarted { secret } => {
            state.new_round(*secret);
        }
        Effect::Message { .. }
        | Effect::GuessInputCleared
        | Effect::WinStyle
        | Effect::NeutralStyle => {}
    }
}
