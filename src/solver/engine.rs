//! Main Hexle solver interface

use super::range::{Candidates, Turn};
use super::strategy::Strategy;
use crate::core::{CODE_LEN, Feedback, HexDigit};
use crate::engine::Grid;

/// Main Hexle solver
///
/// Turns a guess history into the next guess using a given strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    #[inline]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Get the next guess given previous guesses and their feedback
    ///
    /// Returns `None` if the history is contradictory.
    pub fn next_guess(&self, history: &[Turn]) -> Option<[HexDigit; CODE_LEN]> {
        let candidates = Candidates::from_history(history);

        let mut guess = [HexDigit::ALL[0]; CODE_LEN];
        for (slot, range) in guess.iter_mut().zip(candidates.ranges()) {
            *slot = self.strategy.pick_digit(*range)?;
        }
        Some(guess)
    }

    /// Ranges still consistent with the history
    #[must_use]
    pub fn get_candidates(&self, history: &[Turn]) -> Candidates {
        Candidates::from_history(history)
    }

    /// Number of secrets still consistent with the history
    #[must_use]
    pub fn count_candidates(&self, history: &[Turn]) -> u64 {
        Candidates::from_history(history).count()
    }
}

/// Collect every submitted row of `grid` as solver history
#[must_use]
pub fn history_from_grid(grid: &Grid) -> Vec<Turn> {
    grid.rows()
        .take(grid.submitted_rows())
        .filter_map(|row| {
            let mut guess = [HexDigit::ALL[0]; CODE_LEN];
            let mut feedback = [Feedback::Exact; CODE_LEN];
            for (column, cell) in row.iter().enumerate() {
                guess[column] = cell.symbol?;
                feedback[column] = cell.feedback?;
            }
            Some((guess, feedback))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Secret;
    use crate::engine::{GuessEngine, Outcome, guess_keys};
    use crate::solver::{BisectStrategy, RandomStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn to_string(guess: &[HexDigit; CODE_LEN]) -> String {
        guess.iter().map(|d| d.to_char()).collect()
    }

    fn play<S: Strategy>(solver: &Solver<S>, secret: Secret) -> GuessEngine {
        let mut engine = GuessEngine::with_secret(secret, StdRng::seed_from_u64(0));
        while !engine.outcome().is_terminal() {
            let history = history_from_grid(engine.grid());
            let guess = solver.next_guess(&history).unwrap();
            engine.handle_keys(guess_keys(&to_string(&guess)));
        }
        engine
    }

    #[test]
    fn first_guess_is_all_sevens() {
        let solver = Solver::new(BisectStrategy);
        let guess = solver.next_guess(&[]).unwrap();
        assert_eq!(to_string(&guess), "777777");
        assert_eq!(solver.count_candidates(&[]), 16_u64.pow(6));
    }

    #[test]
    fn bisect_wins_within_five_rows() {
        let solver = Solver::new(BisectStrategy);
        for code in ["000000", "ffffff", "a1b2c3", "7f7f7f", "0f0f0f", "c0ffee"] {
            let engine = play(&solver, code.parse().unwrap());
            assert_eq!(engine.outcome(), Outcome::Won, "{code}");
            assert!(engine.attempts() <= 5, "{code} took {}", engine.attempts());
        }
    }

    #[test]
    fn bisect_wins_every_single_digit_value() {
        // Columns are independent, so checking each value in every column covers all codes
        let solver = Solver::new(BisectStrategy);
        for digit in HexDigit::ALL {
            let secret = Secret::new([digit; CODE_LEN]);
            let engine = play(&solver, secret);
            assert_eq!(engine.outcome(), Outcome::Won);
            assert!(engine.attempts() <= 5);
        }
    }

    #[test]
    fn random_strategy_stays_consistent() {
        let solver = Solver::new(RandomStrategy);
        let secret: Secret = "5a5a5a".parse().unwrap();
        let engine = play(&solver, secret);
        if engine.outcome() == Outcome::Won {
            assert!(engine.attempts() <= 6);
        }
        let history = history_from_grid(engine.grid());
        let candidates = solver.get_candidates(&history);
        for (range, digit) in candidates.ranges().iter().zip(secret.digits()) {
            assert!(range.contains(*digit));
        }
    }

    #[test]
    fn contradictory_history_yields_none() {
        let solver = Solver::new(BisectStrategy);
        let zeros = [HexDigit::ALL[0]; CODE_LEN];
        let history = [(zeros, [Feedback::TooHigh; CODE_LEN])];
        assert!(solver.next_guess(&history).is_none());
        assert_eq!(solver.count_candidates(&history), 0);
    }

    #[test]
    fn history_skips_unsubmitted_rows() {
        let mut engine =
            GuessEngine::with_secret("abcdef".parse().unwrap(), StdRng::seed_from_u64(0));
        engine.handle_keys(guess_keys("000000"));
        for ch in "123".chars() {
            engine.insert_digit(ch);
        }
        let history = history_from_grid(engine.grid());
        assert_eq!(history.len(), 1);
        assert_eq!(to_string(&history[0].0), "000000");
        assert!(history[0].1.iter().all(|&f| f == Feedback::TooLow));
    }
}
