//! Hexle solving algorithms
//!
//! Every column is an independent ordered search over `0..=f`; feedback
//! narrows one range per column and a strategy picks the next digit.

mod engine;
pub mod range;
pub mod strategy;

pub use engine::{Solver, history_from_grid};
pub use range::{Candidates, DigitRange, Turn};
pub use strategy::{BisectStrategy, RandomStrategy, Strategy, StrategyType};
