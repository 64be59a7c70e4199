//! Hexle - CLI
//!
//! Guess the hex code of a color, in a TUI or on plain stdin/stdout.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use hexle::{
    commands::{SolveConfig, run_benchmark, run_simple, solve_code},
    config::{AppConfig, LogConfig},
    logging,
    output::{print_benchmark_result, print_solve_result},
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hexle",
    about = "Guess the 6-digit hex code of a color with per-digit higher/lower feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Solver strategy for hints, solve and benchmark: bisect (default), random
    #[arg(short, long, global = true, default_value = "bisect")]
    strategy: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (the only log output in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Let the solver play against a specific code
    Solve {
        /// The target hex code, e.g. c0ffee or #C0FFEE
        code: String,

        /// Show candidate counts for each row
        #[arg(long)]
        detail: bool,
    },

    /// Play many random games with the solver
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log = LogConfig {
        verbosity: cli.verbose,
        file: cli.log_file.clone(),
    };
    let config = AppConfig::new(cli.seed, &cli.strategy, log);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    logging::init(&config.log, !matches!(command, Commands::Play))?;
    info!(strategy = config.strategy.name(), seed = ?config.seed, "Starting");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Solve { code, detail } => run_solve_command(&config, code, detail),
        Commands::Benchmark { count } => {
            run_benchmark_command(&config, count);
            Ok(())
        }
    }
}

fn run_play_command(config: &AppConfig) -> Result<()> {
    use hexle::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}

fn run_simple_command(config: &AppConfig) -> Result<()> {
    let mut engine = config.engine();
    let solver = config.solver();
    run_simple(&mut engine, &solver)?;
    Ok(())
}

fn run_solve_command(config: &AppConfig, code: String, detail: bool) -> Result<()> {
    let solver = config.solver();
    let result = solve_code(SolveConfig::new(code), &solver)?;

    print_solve_result(&result, detail);
    Ok(())
}

fn run_benchmark_command(config: &AppConfig, count: usize) {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    println!(
        "Running benchmark on {count} games with the {} strategy (seed {base_seed})...",
        config.strategy.name()
    );

    let solver = config.solver();
    let result = run_benchmark(&solver, count, base_seed, true);
    print_benchmark_result(&result);
}
