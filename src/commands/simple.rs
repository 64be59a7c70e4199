//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is one full guess.

use crate::core::Secret;
use crate::engine::{GuessEngine, Outcome, ROWS, guess_keys};
use crate::output::formatters::color_swatch;
use crate::output::{print_game_over, print_row};
use crate::solver::{Solver, Strategy, history_from_grid};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for on one input line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Hint,
    Guess(String),
    Invalid(String),
}

/// Classify one line of player input
///
/// Guesses are lowercased and may carry a leading `#`. Anything that is not
/// exactly six hex digits is rejected before it reaches the engine.
fn parse_line(line: &str) -> Command {
    let input = line.trim().to_lowercase();
    match input.as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        "hint" | "h" | "?" => Command::Hint,
        _ => {
            let code = input.strip_prefix('#').unwrap_or(&input);
            if code.len() == 6 && code.chars().all(|c| c.is_ascii_hexdigit()) {
                Command::Guess(code.to_string())
            } else {
                Command::Invalid(input)
            }
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_simple<R: Rng, S: Strategy>(
    engine: &mut GuessEngine<R>,
    solver: &Solver<S>,
) -> io::Result<()> {
    let stdin = io::stdin();
    play_lines(engine, solver, &mut stdin.lock())
}

fn play_lines<R: Rng, S: Strategy>(
    engine: &mut GuessEngine<R>,
    solver: &Solver<S>,
    input: &mut impl BufRead,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Hexle - Simple Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the 6-digit hex code of the color below in {ROWS} tries.");
    println!(
        "  {} too low   {} exact   {} too high\n",
        "↑".on_blue(),
        "=".on_green(),
        "↓".on_red()
    );
    println!("Commands: 'hint' for a suggestion, 'new' for new game, 'quit' to exit\n");

    print_clue(engine);

    let mut line = String::new();
    loop {
        print!("Guess {}/{ROWS}: ", engine.cursor().row + 1);
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        match parse_line(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                engine.reset();
                println!("\n🔄 New game started!\n");
                print_clue(engine);
            }
            Command::Hint => {
                let history = history_from_grid(engine.grid());
                match solver.next_guess(&history) {
                    Some(guess) => println!(
                        "💡 Try {} ({} codes still possible)\n",
                        Secret::new(guess).to_string().bright_yellow(),
                        solver.count_candidates(&history)
                    ),
                    None => println!("No consistent code remains.\n"),
                }
            }
            Command::Invalid(text) => {
                println!("❌ '{text}' is not a 6-digit hex code\n");
            }
            Command::Guess(code) => {
                let row = engine.cursor().row;
                let snapshot = engine.handle_keys(guess_keys(&code));
                print_row(row, snapshot.grid.row(row));

                if snapshot.outcome.is_terminal() {
                    let secret = engine
                        .revealed_secret()
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    print_game_over(
                        snapshot.outcome == Outcome::Won,
                        &secret,
                        engine.attempts(),
                    );

                    if !ask_play_again(input)? {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    engine.reset();
                    println!("\n🔄 New game started!\n");
                    print_clue(engine);
                } else {
                    println!();
                }
            }
        }
    }
}

fn print_clue<R: Rng>(engine: &GuessEngine<R>) {
    println!(
        "  {}\n",
        color_swatch(
            "        ######        ",
            engine.target_rgb(),
            engine.target_contrast_rgb()
        )
    );
}

fn ask_play_again(input: &mut impl BufRead) -> io::Result<bool> {
    print!("Play again? (yes/no): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BisectStrategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn engine(secret: &str) -> GuessEngine {
        GuessEngine::with_secret(secret.parse().unwrap(), StdRng::seed_from_u64(3))
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_line("q\n"), Command::Quit);
        assert_eq!(parse_line(" NEW "), Command::NewGame);
        assert_eq!(parse_line("hint"), Command::Hint);
    }

    #[test]
    fn parse_guess_normalizes() {
        assert_eq!(parse_line("#A1B2C3\n"), Command::Guess("a1b2c3".to_string()));
        assert_eq!(parse_line("00ff00"), Command::Guess("00ff00".to_string()));
    }

    #[test]
    fn parse_rejects_bad_guesses() {
        assert!(matches!(parse_line("12345"), Command::Invalid(_)));
        assert!(matches!(parse_line("1234567"), Command::Invalid(_)));
        assert!(matches!(parse_line("12345g"), Command::Invalid(_)));
    }

    #[test]
    fn winning_line_then_quit() {
        let mut engine = engine("c0ffee");
        let solver = Solver::new(BisectStrategy);
        let mut input = Cursor::new("123456\nc0ffee\nno\n");

        play_lines(&mut engine, &solver, &mut input).unwrap();

        assert_eq!(engine.outcome(), Outcome::Won);
        assert_eq!(engine.attempts(), 2);
    }

    #[test]
    fn invalid_lines_do_not_touch_engine() {
        let mut engine = engine("c0ffee");
        let solver = Solver::new(BisectStrategy);
        let before = engine.snapshot();
        let mut input = Cursor::new("xyz\n12\nhint\n");

        play_lines(&mut engine, &solver, &mut input).unwrap();
        assert_eq!(engine.snapshot(), before);
    }
}
