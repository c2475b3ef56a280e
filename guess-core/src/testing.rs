//! Testing utilities for the game.
//!
//! - `RecordingPresenter` captures every render call and keeps the display
//!   state a real frontend would show
//! - `TestHarness` drives a controller with a pinned secret
//! - Assertion helpers for verifying game state

use crate::config::GameConfig;
use crate::controller::GameController;
use crate::error::GameError;
use crate::render::Presenter;
use crate::rules::GuessOutcome;
use crate::secret::FixedSecret;
use crate::state::{GameState, STARTING_SCORE};

/// One call made against a [`Presenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Message(String),
    Score(u8),
    Highscore(u8),
    RevealSecret(u8),
    HideSecret,
    ClearGuessInput,
    WinStyle,
    NeutralStyle,
}

/// A presenter that records calls and tracks what would be on screen.
#[derive(Debug, Clone)]
pub struct RecordingPresenter {
    calls: Vec<RenderCall>,
    /// Current message text.
    pub message: String,
    /// Displayed score.
    pub score: u8,
    /// Displayed highscore.
    pub highscore: u8,
    /// Revealed secret, `None` while hidden.
    pub shown_secret: Option<u8>,
    /// Whether win styling is active.
    pub win_style: bool,
    /// Times the guess input was cleared.
    pub input_clears: usize,
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            message: String::new(),
            score: STARTING_SCORE,
            highscore: 0,
            shown_secret: None,
            win_style: false,
            input_clears: 0,
        }
    }
}

impl RecordingPresenter {
    /// All calls made so far, oldest first.
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Forget recorded calls, keeping display state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
        self.calls.push(RenderCall::Message(text.to_string()));
    }

    fn set_score(&mut self, score: u8) {
        self.score = score;
        self.calls.push(RenderCall::Score(score));
    }

    fn set_highscore(&mut self, highscore: u8) {
        self.highscore = highscore;
        self.calls.push(RenderCall::Highscore(highscore));
    }

    fn reveal_secret(&mut self, secret: u8) {
        self.shown_secret = Some(secret);
        self.calls.push(RenderCall::RevealSecret(secret));
    }

    fn hide_secret(&mut self) {
        self.shown_secret = None;
        self.calls.push(RenderCall::HideSecret);
    }

    fn clear_guess_input(&mut self) {
        self.input_clears += 1;
        self.calls.push(RenderCall::ClearGuessInput);
    }

    fn apply_win_style(&mut self) {
        self.win_style = true;
        self.calls.push(RenderCall::WinStyle);
    }

    fn apply_neutral_style(&mut self) {
        self.win_style = false;
        self.calls.push(RenderCall::NeutralStyle);
    }
}

/// Test harness for running game scenarios against a known secret.
pub struct TestHarness {
    /// The controller under test.
    pub game: GameController,
    /// Everything the controller rendered.
    pub presenter: RecordingPresenter,
}

impl TestHarness {
    /// Every round uses `secret`.
    pub fn new(secret: u8) -> Self {
        Self::with_secrets([secret], GameConfig::default())
    }

    /// One secret per round, the last one repeating.
    pub fn with_secrets(secrets: impl IntoIterator<Item = u8>, config: GameConfig) -> Self {
        let game = GameController::with_source(FixedSecret::sequence(secrets), &config);
        let mut presenter = RecordingPresenter::default();
        game.render(&mut presenter);
        presenter.clear_calls();
        Self { game, presenter }
    }

    /// Submit a guess.
    ///
    /// # Panics
    ///
    /// Panics if the round lock rejects the guess; use [`Self::try_guess`]
    /// to observe that case.
    #[track_caller]
    pub fn guess(&mut self, raw: &str) -> GuessOutcome {
        match self.try_guess(raw) {
            Ok(outcome) => outcome,
            Err(e) => panic!("guess {raw:?} rejected: {e}"),
        }
    }

    /// Submit a guess, returning the lock error if any.
    pub fn try_guess(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        self.game.check_guess(raw, &mut self.presenter)
    }

    /// Start a new round.
    pub fn reset(&mut self) {
        self.game.reset_game(&mut self.presenter);
    }

    /// Drive the score down to `score` with wrong guesses.
    ///
    /// # Panics
    ///
    /// Panics if `score` is above the current score or is zero.
    #[track_caller]
    pub fn drain_score_to(&mut self, score: u8) {
        assert!(score >= 1, "use a losing guess to reach zero");
        assert!(score <= self.state().score(), "score only goes down");
        let wrong = self.wrong_guess();
        while self.state().score() > score {
            self.guess(&wrong);
        }
    }

    /// A guess that is guaranteed to miss the current secret.
    pub fn wrong_guess(&self) -> String {
        let secret = self.state().secret();
        if secret == 1 { "2" } else { "1" }.to_string()
    }

    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    pub fn score(&self) -> u8 {
        self.state().score()
    }

    pub fn highscore(&self) -> u8 {
        self.state().highscore()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the score in both the state and the display.
#[track_caller]
pub fn assert_score(harness: &TestHarness, expected: u8) {
    assert_eq!(
        harness.score(),
        expected,
        "Expected score {expected}, got {}",
        harness.score()
    );
    assert_eq!(
        harness.presenter.score, expected,
        "Displayed score out of sync"
    );
}

/// Assert the highscore in both the state and the display.
#[track_caller]
pub fn assert_highscore(harness: &TestHarness, expected: u8) {
    assert_eq!(
        harness.highscore(),
        expected,
        "Expected highscore {expected}, got {}",
        harness.highscore()
    );
    assert_eq!(
        harness.presenter.highscore, expected,
        "Displayed highscore out of sync"
    );
}

/// Assert the secret is hidden and neutral styling is active.
#[track_caller]
pub fn assert_neutral_display(harness: &TestHarness) {
    assert_eq!(harness.presenter.shown_secret, None, "Expected hidden secret");
    assert!(!harness.presenter.win_style, "Expected neutral styling");
}
