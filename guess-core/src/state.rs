//! Game state owned by a single controller.

use serde::{Deserialize, Serialize};

/// Smallest value the secret number can take.
pub const MIN_SECRET: u8 = 1;

/// Largest value the secret number can take.
pub const MAX_SECRET: u8 = 20;

/// Score at the start of every round.
pub const STARTING_SCORE: u8 = 20;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No win or loss declared yet.
    #[default]
    Playing,
    /// The last evaluation produced `Correct` or `Lost`.
    RoundOver,
}

/// Mutable state for one game session.
///
/// `secret` and `score` are recreated every round; `highscore` and the round
/// counters live for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) secret: u8,
    pub(crate) score: u8,
    pub(crate) highscore: u8,
    pub(crate) phase: Phase,
    pub(crate) revealed: bool,
    pub(crate) rounds_played: u32,
    pub(crate) rounds_won: u32,
}

impl GameState {
    /// Start a fresh session around the given secret.
    pub(crate) fn new(secret: u8) -> Self {
        debug_assert!((MIN_SECRET..=MAX_SECRET).contains(&secret));
        Self {
            secret,
            score: STARTING_SCORE,
            highscore: 0,
            phase: Phase::Playing,
            revealed: false,
            rounds_played: 0,
            rounds_won: 0,
        }
    }

    /// Begin a new round, keeping the highscore and round counters.
    pub(crate) fn new_round(&mut self, secret: u8) {
        debug_assert!((MIN_SECRET..=MAX_SECRET).contains(&secret));
        self.secret = secret;
        self.score = STARTING_SCORE;
        self.phase = Phase::Playing;
        self.revealed = false;
    }

    pub fn secret(&self) -> u8 {
        self.secret
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn highscore(&self) -> u8 {
        self.highscore
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the secret has been shown to the player this round.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// Read-only view that never leaks an unrevealed secret.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score,
            highscore: self.highscore,
            phase: self.phase,
            secret_revealed: self.revealed.then_some(self.secret),
            rounds_played: self.rounds_played,
            rounds_won: self.rounds_won,
        }
    }
}

/// Serializable view of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: u8,
    pub highscore: u8,
    pub phase: Phase,
    pub secret_revealed: Option<u8>,
    pub rounds_played: u32,
    pub rounds_won: u32,
}
