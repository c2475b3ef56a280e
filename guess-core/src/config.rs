//! Session configuration.

use crate::secret::{RandomSecret, SecretSource};

/// Configuration for a game session.
///
/// The secret range and starting score are fixed; only how secrets are drawn
/// and how strictly finished rounds are enforced can change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the secret generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Reject guesses once a round has been won or lost.
    pub round_lock: bool,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the secret generator for a reproducible session.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the finished-round lock.
    pub fn with_round_lock(mut self, round_lock: bool) -> Self {
        self.round_lock = round_lock;
        self
    }

    /// Build the secret source described by this configuration.
    pub(crate) fn secret_source(&self) -> Box<dyn SecretSource> {
        match self.seed {
            Some(seed) => Box::new(RandomSecret::seeded(seed)),
            None => Box::new(RandomSecret::new()),
        }
    }
}
