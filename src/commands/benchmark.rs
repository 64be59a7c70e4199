//! Benchmark command
//!
//! Plays many seeded games with a strategy and collects the guess distribution.

use crate::core::Secret;
use crate::engine::{GuessEngine, Outcome, guess_keys};
use crate::solver::{Solver, Strategy, history_from_grid};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub games_won: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Rows used by won games; lost games are counted in `total_games` only
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Outcome of one simulated game
struct GameRecord {
    won: bool,
    rows: usize,
}

/// Play one game from `seed` until it ends
fn play_game<S: Strategy>(solver: &Solver<S>, seed: u64) -> GameRecord {
    let mut rng = StdRng::seed_from_u64(seed);
    let secret = Secret::generate(&mut rng);
    let mut engine = GuessEngine::with_secret(secret, rng);

    while !engine.outcome().is_terminal() {
        let history = history_from_grid(engine.grid());
        let Some(guess) = solver.next_guess(&history) else {
            break;
        };
        engine.handle_keys(guess_keys(&Secret::new(guess).to_string()));
    }

    GameRecord {
        won: engine.outcome() == Outcome::Won,
        rows: engine.attempts(),
    }
}

/// Run `count` games with secrets drawn from seeds `base_seed..base_seed + count`
///
/// Games run in parallel. Pass `show_progress = false` to hide the progress bar.
///
/// # Panics
///
/// Panics if the hard-coded progress bar template is invalid.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    count: usize,
    base_seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let records: Vec<GameRecord> = (0..count as u64)
        .into_par_iter()
        .map(|offset| {
            let record = play_game(solver, base_seed.wrapping_add(offset));
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_and_clear();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_guesses = 0;
    let mut games_won = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for record in &records {
        total_guesses += record.rows;
        min_guesses = min_guesses.min(record.rows);
        max_guesses = max_guesses.max(record.rows);
        if record.won {
            games_won += 1;
            *distribution.entry(record.rows).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();
    let total_games = records.len();
    debug!(total_games, games_won, ?duration, "Benchmark finished");

    BenchmarkResult {
        total_games,
        games_won,
        total_guesses,
        average_guesses: total_guesses as f64 / total_games.max(1) as f64,
        min_guesses: if total_games == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ROWS;
    use crate::solver::{BisectStrategy, RandomStrategy};

    #[test]
    fn benchmark_runs() {
        let solver = Solver::new(BisectStrategy);
        let result = run_benchmark(&solver, 50, 0, false);

        assert_eq!(result.total_games, 50);
        assert_eq!(result.games_won, 50);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 5);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let solver = Solver::new(RandomStrategy);
        let result = run_benchmark(&solver, 40, 7, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.games_won);
        for &rows in result.distribution.keys() {
            assert!((1..=ROWS).contains(&rows));
        }
    }

    #[test]
    fn benchmark_is_reproducible() {
        let solver = Solver::new(BisectStrategy);
        let a = run_benchmark(&solver, 20, 123, false);
        let b = run_benchmark(&solver, 20, 123, false);
        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_zero_games() {
        let solver = Solver::new(BisectStrategy);
        let result = run_benchmark(&solver, 0, 0, false);

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }
}
