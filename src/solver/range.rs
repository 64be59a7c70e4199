//! Candidate ranges narrowed by feedback
//!
//! Columns are independent, so the set of secrets consistent with the
//! history is a product of one inclusive digit range per column.

use crate::core::{CODE_LEN, Feedback, HexDigit, RADIX};

/// A guessed row together with the feedback it received
pub type Turn = ([HexDigit; CODE_LEN], [Feedback; CODE_LEN]);

/// Inclusive range of digit values still possible for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRange {
    lo: u8,
    hi: u8,
}

impl DigitRange {
    /// The whole alphabet, `0..=f`
    pub const FULL: Self = Self {
        lo: 0,
        hi: RADIX - 1,
    };

    #[inline]
    #[must_use]
    pub const fn lo(self) -> u8 {
        self.lo
    }

    #[inline]
    #[must_use]
    pub const fn hi(self) -> u8 {
        self.hi
    }

    /// Number of values left (0 when feedback contradicted itself)
    #[must_use]
    pub const fn size(self) -> u8 {
        if self.lo > self.hi {
            0
        } else {
            self.hi - self.lo + 1
        }
    }

    #[must_use]
    pub const fn contains(self, digit: HexDigit) -> bool {
        self.lo <= digit.value() && digit.value() <= self.hi
    }

    /// Shrink the range using the feedback for `guess`
    #[must_use]
    pub fn narrow(self, guess: HexDigit, feedback: Feedback) -> Self {
        let value = guess.value();
        match feedback {
            // Secret is above the guess
            Feedback::TooLow => Self {
                lo: self.lo.max(value + 1),
                hi: self.hi,
            },
            Feedback::Exact => Self {
                lo: self.lo.max(value),
                hi: self.hi.min(value),
            },
            // Secret is below the guess; value 0 can never be too high
            Feedback::TooHigh => match value.checked_sub(1) {
                Some(below) => Self {
                    lo: self.lo,
                    hi: self.hi.min(below),
                },
                None => Self { lo: 1, hi: 0 },
            },
        }
    }
}

/// Per-column ranges consistent with a guess history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates([DigitRange; CODE_LEN]);

impl Candidates {
    /// Every code is still possible
    #[must_use]
    pub const fn all() -> Self {
        Self([DigitRange::FULL; CODE_LEN])
    }

    /// Narrow from scratch using every turn in `history`
    #[must_use]
    pub fn from_history(history: &[Turn]) -> Self {
        history.iter().fold(Self::all(), |acc, turn| acc.apply(turn))
    }

    /// Narrow each column by one turn
    #[must_use]
    pub fn apply(self, (guess, feedback): &Turn) -> Self {
        let mut ranges = self.0;
        for (column, range) in ranges.iter_mut().enumerate() {
            *range = range.narrow(guess[column], feedback[column]);
        }
        Self(ranges)
    }

    #[inline]
    #[must_use]
    pub const fn ranges(&self) -> &[DigitRange; CODE_LEN] {
        &self.0
    }

    /// Number of secrets still consistent with the history
    #[must_use]
    pub fn count(&self) -> u64 {
        self.0.iter().map(|r| u64::from(r.size())).product()
    }

    /// Whether the history contradicts itself
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().any(|r| r.size() == 0)
    }
}
