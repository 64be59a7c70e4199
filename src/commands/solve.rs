//! Solve command
//!
//! Plays a game against a given secret and returns the solution path.

use crate::core::{CODE_LEN, Feedback, ParseError, Secret};
use crate::engine::{GuessEngine, Outcome, ROWS, guess_keys};
use crate::solver::{Solver, Strategy, history_from_grid};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a code
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: ROWS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single row in the solution
pub struct GuessStep {
    pub guess: String,
    pub feedback: [Feedback; CODE_LEN],
    pub candidates_before: u64,
    pub candidates_after: u64,
}

/// Solve a specific code using the given solver
///
/// Stops early after `max_guesses` rows even if the game would allow more.
///
/// # Errors
///
/// Returns an error if the target is not a 6-digit hex code.
pub fn solve_code<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, ParseError> {
    let secret: Secret = config.target.parse()?;
    let mut engine = GuessEngine::with_secret(secret, StdRng::seed_from_u64(0));
    let mut guesses = Vec::new();

    while !engine.outcome().is_terminal() && guesses.len() < config.max_guesses {
        let history = history_from_grid(engine.grid());
        let candidates_before = solver.count_candidates(&history);

        let Some(guess) = solver.next_guess(&history) else {
            break;
        };
        let guess = Secret::new(guess).to_string();

        let row = engine.cursor().row;
        let snapshot = engine.handle_keys(guess_keys(&guess));

        let mut feedback = [Feedback::Exact; CODE_LEN];
        for (slot, cell) in feedback.iter_mut().zip(snapshot.grid.row(row)) {
            *slot = cell.feedback.unwrap_or(Feedback::Exact);
        }

        let candidates_after = solver.count_candidates(&history_from_grid(&snapshot.grid));
        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });
    }

    Ok(SolveResult {
        success: engine.outcome() == Outcome::Won,
        guesses,
        target: secret.to_string(),
    })
}
