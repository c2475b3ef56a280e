//! Randomized checks of the scoring invariants.
//!
//! Each test plays many seeded sessions with random inputs and checks the
//! invariants after every step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use guess_core::{
    GameConfig, GameController, GuessOutcome, NullPresenter, MAX_SECRET, MIN_SECRET,
    STARTING_SCORE,
};

const SESSIONS: u64 = 200;
const STEPS: usize = 80;

fn random_input<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..10) {
        0 => String::new(),
        1 => "0".to_string(),
        2 => "not a number".to_string(),
        3 => rng.gen_range(-50..200).to_string(),
        _ => rng.gen_range(MIN_SECRET..=MAX_SECRET).to_string(),
    }
}

#[test]
fn test_score_tracks_wrong_guesses() {
    for seed in 0..SESSIONS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameController::new(&GameConfig::new().with_seed(seed));
        let mut wrong_guesses: u32 = 0;

        for _ in 0..STEPS {
            let input = random_input(&mut rng);
            let outcome = game.check_guess(&input, &mut NullPresenter).unwrap();
            if matches!(
                outcome,
                GuessOutcome::TooHigh | GuessOutcome::TooLow | GuessOutcome::Lost
            ) {
                wrong_guesses += 1;
            }

            let expected = u32::from(STARTING_SCORE).saturating_sub(wrong_guesses);
            assert_eq!(u32::from(game.state().score()), expected, "seed {seed}");

            if rng.gen_bool(0.05) {
                game.reset_game(&mut NullPresenter);
                wrong_guesses = 0;
            }
        }
    }
}

#[test]
fn test_secret_in_range_and_stable_within_round() {
    for seed in 0..SESSIONS {
        let mut rng = StdRng::seed_from_u64(seed ^ 0xA5A5);
        let mut game = GameController::new(&GameConfig::new().with_seed(seed));

        for _ in 0..STEPS {
            let secret = game.state().secret();
            assert!((MIN_SECRET..=MAX_SECRET).contains(&secret));

            if rng.gen_bool(0.1) {
                game.reset_game(&mut NullPresenter);
                let fresh = game.state().secret();
                assert!((MIN_SECRET..=MAX_SECRET).contains(&fresh));
            } else {
                let input = random_input(&mut rng);
                game.check_guess(&input, &mut NullPresenter).unwrap();
                assert_eq!(game.state().secret(), secret, "seed {seed}");
            }
        }
    }
}

#[test]
fn test_highscore_never_decreases() {
    for seed in 0..SESSIONS {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_mul(31));
        let mut game = GameController::new(&GameConfig::new().with_seed(seed));
        let mut best = 0;

        for _ in 0..STEPS {
            if rng.gen_bool(0.1) {
                game.reset_game(&mut NullPresenter);
            } else {
                let input = random_input(&mut rng);
                game.check_guess(&input, &mut NullPresenter).unwrap();
            }

            let highscore = game.state().highscore();
            assert!(highscore >= best, "seed {seed}: {highscore} < {best}");
            assert!(highscore <= STARTING_SCORE);
            best = highscore;
        }
    }
}

#[test]
fn test_invalid_input_changes_nothing() {
    for seed in 0..SESSIONS {
        let mut rng = StdRng::seed_from_u64(seed + 1000);
        let mut game = GameController::new(&GameConfig::new().with_seed(seed));

        for _ in 0..STEPS {
            let input = random_input(&mut rng);
            let before = game.state().clone();
            let outcome = game.check_guess(&input, &mut NullPresenter).unwrap();
            if outcome == GuessOutcome::Invalid {
                assert_eq!(game.state(), &before, "seed {seed}, input {input:?}");
            }
        }
    }
}
