//! Hexle
//!
//! Guess the 6-digit hex code of a color in six tries, with per-digit
//! "too low / exact / too high" feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use hexle::engine::{GuessEngine, Outcome, guess_keys};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let secret = "a1b2c3".parse().unwrap();
//! let mut engine = GuessEngine::with_secret(secret, StdRng::seed_from_u64(0));
//!
//! let snapshot = engine.handle_keys(guess_keys("a1b2c3"));
//! assert_eq!(snapshot.outcome, Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;
