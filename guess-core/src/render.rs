//! Render contract between the game and whatever displays it.

use crate::rules::Effect;

/// Capabilities a presentation surface must expose.
///
/// The controller never talks to a frontend directly; it hands the effects of
/// each evaluation to [`present_effects`], which calls these methods.
pub trait Presenter {
    fn set_message(&mut self, text: &str);
    fn set_score(&mut self, score: u8);
    fn set_highscore(&mut self, highscore: u8);
    fn reveal_secret(&mut self, secret: u8);
    fn hide_secret(&mut self);
    fn clear_guess_input(&mut self);
    fn apply_win_style(&mut self);
    fn apply_neutral_style(&mut self);
}

/// A presenter that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn set_message(&mut self, _text: &str) {}
    fn set_score(&mut self, _score: u8) {}
    fn set_highscore(&mut self, _highscore: u8) {}
    fn reveal_secret(&mut self, _secret: u8) {}
    fn hide_secret(&mut self) {}
    fn clear_guess_input(&mut self) {}
    fn apply_win_style(&mut self) {}
    fn apply_neutral_style(&mut self) {}
}

/// Map effects onto presenter calls, in order.
pub fn present_effects<P: Presenter + ?Sized>(presenter: &mut P, effects: &[Effect]) {
    for effect in effects {
        present_effect(presenter, effect);
    }
}

/// Map a single effect onto presenter calls.
pub fn present_effect<P: Presenter + ?Sized>(presenter: &mut P, effect: &Effect) {
    match effect {
        Effect::Message { text } => presenter.set_message(text),
        Effect::ScoreChanged { new_score } => presenter.set_score(*new_score),
        Effect::HighscoreChanged { new_highscore } => presenter.set_highscore(*new_highscore),
        Effect::SecretRevealed { secret } => presenter.reveal_secret(*secret),
        Effect::SecretHidden => presenter.hide_secret(),
        Effect::GuessInputCleared => presenter.clear_guess_input(),
        Effect::WinStyle => presenter.apply_win_style(),
        Effect::NeutralStyle => presenter.apply_neutral_style(),
        // Bookkeeping only
        Effect::RoundEnded { .. } | Effect::RoundStarted { .. } => {}
    }
}
