//! The game controller: sole owner of session state.

use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::render::{present_effects, Presenter};
use crate::rules::{self, Effect, GuessOutcome, MSG_START};
use crate::secret::SecretSource;
use crate::state::{GameState, Phase};

/// Owns the secret, score and highscore for one session and reacts to the
/// two player triggers: checking a guess and starting over.
pub struct GameController {
    state: GameState,
    secrets: Box<dyn SecretSource>,
    round_lock: bool,
    message: String,
}

impl GameController {
    /// Create a controller whose secrets come from the configured generator.
    pub fn new(config: &GameConfig) -> Self {
        Self::from_boxed(config.secret_source(), config)
    }

    /// Create a controller with an explicit secret source.
    pub fn with_source(source: impl SecretSource + 'static, config: &GameConfig) -> Self {
        Self::from_boxed(Box::new(source), config)
    }

    fn from_boxed(mut secrets: Box<dyn SecretSource>, config: &GameConfig) -> Self {
        let secret = secrets.draw();
        trace!(secret, "initial secret drawn");
        Self {
            state: GameState::new(secret),
            secrets,
            round_lock: config.round_lock,
            message: MSG_START.to_string(),
        }
    }

    /// Evaluate raw text from the guess field.
    ///
    /// Always produces exactly one outcome unless the round lock is enabled
    /// and the round is already decided.
    pub fn check_guess<P: Presenter + ?Sized>(
        &mut self,
        raw: &str,
        presenter: &mut P,
    ) -> Result<GuessOutcome, GameError> {
        if self.round_lock && self.state.phase() == Phase::RoundOver {
            debug!("guess rejected: round over");
            return Err(GameError::RoundOver);
        }

        let guess = rules::coerce_guess(raw);
        let resolution = rules::evaluate(&self.state, guess);
        self.commit(&resolution.effects, presenter);

        debug!(
            outcome = %resolution.outcome,
            score = self.state.score(),
            highscore = self.state.highscore(),
            "guess evaluated"
        );
        if resolution
            .effects
            .iter()
            .any(|e| matches!(e, Effect::RoundEnded { .. }))
        {
            info!(
                outcome = %resolution.outcome,
                score = self.state.score(),
                rounds_played = self.state.rounds_played(),
                "round over"
            );
        }

        Ok(resolution.outcome)
    }

    /// Start a new round: full score, fresh secret, neutral display.
    /// The highscore is kept.
    pub fn reset_game<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        let secret = self.secrets.draw();
        trace!(secret, "secret drawn");
        let effects = rules::new_round_effects(secret);
        self.commit(&effects, presenter);
        info!(highscore = self.state.highscore(), "new round");
    }

    /// Push the complete current state to a presenter, e.g. after the
    /// frontend has been (re)created.
    pub fn render<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        presenter.set_message(&self.message);
        presenter.set_score(self.state.score());
        presenter.set_highscore(self.state.highscore());
        if self.state.is_revealed() {
            presenter.reveal_secret(self.state.secret());
            presenter.apply_win_style();
        } else {
            presenter.hide_secret();
            presenter.apply_neutral_style();
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The message most recently shown to the player.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn round_lock(&self) -> bool {
        self.round_lock
    }

    fn commit<P: Presenter + ?Sized>(&mut self, effects: &[Effect], presenter: &mut P) {
        rules::apply_effects(&mut self.state, effects);
        for effect in effects {
            if let Effect::Message { text } = effect {
                self.message.clone_from(text);
            }
        }
        present_effects(presenter, effects);
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("score", &self.state.score())
            .field("highscore", &self.state.highscore())
            .field("phase", &self.state.phase())
            .field("round_lock", &self.round_lock)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullPresenter;
    use crate::secret::FixedSecret;
    use crate::state::STARTING_SCORE;
    use crate::testing::{RecordingPresenter, RenderCall};

    fn controller(secret: u8) -> GameController {
        GameController::with_source(FixedSecret::new(secret), &GameConfig::default())
    }

    #[test]
    fn test_check_guess_renders_directional_message() {
        let mut game = controller(14);
        let mut presenter = RecordingPresenter::default();

        let outcome = game.check_guess("20", &mut presenter).unwrap();

        assert_eq!(outcome, GuessOutcome::TooHigh);
        assert_eq!(
            presenter.calls(),
            &[
                RenderCall::Message(rules::MSG_TOO_HIGH.to_string()),
                RenderCall::Score(19),
            ]
        );
        assert_eq!(game.message(), rules::MSG_TOO_HIGH);
    }

    #[test]
    fn test_win_renders_reveal_and_highscore() {
        let mut game = controller(14);
        let mut presenter = RecordingPresenter::default();

        game.check_guess("14", &mut presenter).unwrap();

        assert!(presenter.calls().contains(&RenderCall::RevealSecret(14)));
        assert!(presenter.calls().contains(&RenderCall::WinStyle));
        assert!(presenter.calls().contains(&RenderCall::Highscore(20)));
        assert_eq!(game.state().phase(), Phase::RoundOver);
    }

    #[test]
    fn test_reset_renders_neutral_display() {
        let mut game = GameController::with_source(
            FixedSecret::sequence([14, 9]),
            &GameConfig::default(),
        );
        game.check_guess("3", &mut NullPresenter).unwrap();

        let mut presenter = RecordingPresenter::default();
        game.reset_game(&mut presenter);

        assert_eq!(game.state().secret(), 9);
        assert_eq!(game.state().score(), STARTING_SCORE);
        assert_eq!(
            presenter.calls(),
            &[
                RenderCall::Message(MSG_START.to_string()),
                RenderCall::Score(STARTING_SCORE),
                RenderCall::HideSecret,
                RenderCall::ClearGuessInput,
                RenderCall::NeutralStyle,
            ]
        );
    }

    #[test]
    fn test_loose_mode_keeps_evaluating_after_win() {
        let mut game = controller(14);
        game.check_guess("14", &mut NullPresenter).unwrap();

        let outcome = game.check_guess("2", &mut NullPresenter).unwrap();
        assert_eq!(outcome, GuessOutcome::TooLow);
        assert_eq!(game.state().score(), 19);
        assert_eq!(game.state().highscore(), 20);
    }

    #[test]
    fn test_round_lock_rejects_after_round_over() {
        let config = GameConfig::new().with_round_lock(true);
        let mut game = GameController::with_source(FixedSecret::new(14), &config);
        game.check_guess("14", &mut NullPresenter).unwrap();

        let mut presenter = RecordingPresenter::default();
        let result = game.check_guess("2", &mut presenter);

        assert_eq!(result, Err(GameError::RoundOver));
        assert!(presenter.calls().is_empty());
        assert_eq!(game.state().score(), 20);

        game.reset_game(&mut NullPresenter);
        assert_eq!(
            game.check_guess("14", &mut NullPresenter),
            Ok(GuessOutcome::Correct)
        );
    }

    #[test]
    fn test_round_lock_allows_invalid_while_playing() {
        let config = GameConfig::new().with_round_lock(true);
        let mut game = GameController::with_source(FixedSecret::new(14), &config);
        assert_eq!(
            game.check_guess("", &mut NullPresenter),
            Ok(GuessOutcome::Invalid)
        );
    }

    #[test]
    fn test_render_full_state() {
        let mut game = controller(5);
        game.check_guess("5", &mut NullPresenter).unwrap();

        let mut presenter = RecordingPresenter::default();
        game.render(&mut presenter);

        assert_eq!(
            presenter.calls(),
            &[
                RenderCall::Message(rules::MSG_CORRECT.to_string()),
                RenderCall::Score(20),
                RenderCall::Highscore(20),
                RenderCall::RevealSecret(5),
                RenderCall::WinStyle,
            ]
        );
    }

    #[test]
    fn test_seeded_controllers_agree() {
        let config = GameConfig::new().with_seed(2024);
        let mut a = GameController::new(&config);
        let mut b = GameController::new(&config);
        for _ in 0..5 {
            assert_eq!(a.state().secret(), b.state().secret());
            a.reset_game(&mut NullPresenter);
            b.reset_game(&mut NullPresenter);
        }
    }
}
