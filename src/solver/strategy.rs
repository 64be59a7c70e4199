//! Digit selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::range::DigitRange;
use crate::core::HexDigit;
use rand::Rng;

/// A strategy for picking the next digit to try in one column
pub trait Strategy {
    /// Pick a digit inside `range`
    ///
    /// Returns `None` if the range is empty.
    fn pick_digit(&self, range: DigitRange) -> Option<HexDigit>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Midpoint bisection (default, never needs more than 5 rows)
    Bisect(BisectStrategy),
    /// Uniform pick inside the remaining range
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn pick_digit(&self, range: DigitRange) -> Option<HexDigit> {
        match self {
            Self::Bisect(s) => s.pick_digit(range),
            Self::Random(s) => s.pick_digit(range),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "bisect", "random".
    /// Defaults to bisect if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Bisect(BisectStrategy),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bisect(_) => "bisect",
            Self::Random(_) => "random",
        }
    }
}

/// Midpoint strategy
///
/// Always guesses `(lo + hi) / 2`, halving the range on every miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BisectStrategy;

impl Strategy for BisectStrategy {
    fn pick_digit(&self, range: DigitRange) -> Option<HexDigit> {
        if range.size() == 0 {
            return None;
        }
        HexDigit::new((range.lo() + range.hi()) / 2)
    }
}

/// Random strategy
///
/// Picks uniformly inside the remaining range. Mostly useful as a baseline
/// for benchmarks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn pick_digit(&self, range: DigitRange) -> Option<HexDigit> {
        if range.size() == 0 {
            return None;
        }
        HexDigit::new(rand::rng().random_range(range.lo()..=range.hi()))
    }
}
