//! Headless mode for the game.
//!
//! A line-oriented interface without a TUI, for scripts and automated
//! testing.

use std::io::{self, BufRead, Write};

use guess_core::{GameConfig, GuessOutcome, GuessResponse, HeadlessGame, MAX_SECRET, MIN_SECRET};

const HELP: &str = concat!(
    "  <number>  - Check a guess\n",
    "  #again    - Start a new round\n",
    "  #status   - Show current game status\n",
    "  #state    - Print the game state as JSON\n",
    "  #help     - Show this help\n",
    "  #quit     - Exit the game",
);

/// Run the game in headless mode on stdin/stdout.
pub fn run_headless(config: &GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(config, stdin.lock(), &mut stdout.lock())
}

/// Run a headless session over arbitrary reader/writer pairs.
///
/// Protocol:
/// - Lines starting with `#` are commands (again, status, state, help, quit)
/// - Every other line is submitted as a guess
pub fn run_session<R: BufRead, W: Write>(
    config: &GameConfig,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut game = HeadlessGame::new(config);

    writeln!(out, "=== Guess My Number! ===")?;
    writeln!(out, "Between {MIN_SECRET} and {MAX_SECRET}. {}", game.message())?;
    writeln!(out, "Score: {} | Highscore: {}", game.score(), game.highscore())?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "{HELP}")?;
    writeln!(out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(command) = line.strip_prefix('#') {
            let parts: Vec<&str> = command.split_whitespace().collect();
            match parts.first().copied() {
                Some("quit") | Some("exit") => {
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                Some("again") => {
                    game.again();
                    writeln!(out, "[AGAIN] {}", game.message())?;
                    writeln!(out, "Score: {} | Highscore: {}", game.score(), game.highscore())?;
                }
                Some("status") => {
                    writeln!(out, "[STATUS]")?;
                    writeln!(out, "  Round: {}", game.round())?;
                    writeln!(out, "  Guesses this round: {}", game.guesses_this_round())?;
                    writeln!(out, "  Score: {}", game.score())?;
                    writeln!(out, "  Highscore: {}", game.highscore())?;
                    let snapshot = game.snapshot();
                    writeln!(
                        out,
                        "  Rounds won: {}/{}",
                        snapshot.rounds_won, snapshot.rounds_played
                    )?;
                }
                Some("state") => match game.snapshot_json() {
                    Ok(json) => writeln!(out, "{json}")?,
                    Err(e) => writeln!(out, "[ERROR] {e}")?,
                },
                Some("help") => {
                    writeln!(out, "[HELP]")?;
                    writeln!(out, "{HELP}")?;
                }
                _ => {
                    writeln!(out, "[ERROR] Unknown command. Type #help for help.")?;
                }
            }
            out.flush()?;
            continue;
        }

        match game.send(line) {
            Ok(response) => print_response(out, &response)?,
            Err(e) => writeln!(out, "[ERROR] {e}")?,
        }
        out.flush()?;
    }

    Ok(())
}

fn print_response<W: Write>(out: &mut W, response: &GuessResponse) -> io::Result<()> {
    let tag = match response.outcome {
        GuessOutcome::Invalid => "INVALID",
        GuessOutcome::TooHigh => "TOO HIGH",
        GuessOutcome::TooLow => "TOO LOW",
        GuessOutcome::Correct => "CORRECT",
        GuessOutcome::Lost => "LOST",
    };
    writeln!(out, "[{tag}] {}", response.message)?;
    if let Some(secret) = response.revealed {
        writeln!(out, "The number was {secret}.")?;
    }
    writeln!(
        out,
        "Score: {} | Highscore: {}",
        response.score, response.highscore
    )
}
