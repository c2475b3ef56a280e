use thiserror::Error;

/// Errors from [`crate::GameController`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The round is over - start a new game to keep guessing")]
    RoundOver,
}
