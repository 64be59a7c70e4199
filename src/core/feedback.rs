//! Per-digit feedback for a submitted guess
//!
//! Each column is compared on its own by numeric value:
//! - `TooLow`: guessed digit is smaller than the secret digit
//! - `Exact`: digits are equal
//! - `TooHigh`: guessed digit is larger than the secret digit
//!
//! There is no "right digit, wrong place" category; columns never
//! influence each other.

use super::digit::HexDigit;
use super::secret::{CODE_LEN, Secret};
use std::cmp::Ordering;

/// Comparison result for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    TooLow,
    Exact,
    TooHigh,
}

impl Feedback {
    /// Compare a guessed digit against the secret digit in the same column
    ///
    /// # Examples
    /// ```
    /// use hexle::core::{Feedback, HexDigit};
    ///
    /// let nine = HexDigit::from_char('9').unwrap();
    /// let a = HexDigit::from_char('a').unwrap();
    ///
    /// // Values are compared, not characters: 9 < 10
    /// assert_eq!(Feedback::compare(nine, a), Feedback::TooLow);
    /// assert_eq!(Feedback::compare(a, nine), Feedback::TooHigh);
    /// ```
    #[must_use]
    pub fn compare(guess: HexDigit, secret: HexDigit) -> Self {
        match guess.value().cmp(&secret.value()) {
            Ordering::Less => Self::TooLow,
            Ordering::Equal => Self::Exact,
            Ordering::Greater => Self::TooHigh,
        }
    }

    /// Feedback for a full row of guessed digits
    #[must_use]
    pub fn row(guess: &[HexDigit; CODE_LEN], secret: &Secret) -> [Self; CODE_LEN] {
        let mut result = [Self::Exact; CODE_LEN];
        for (column, slot) in result.iter_mut().enumerate() {
            *slot = Self::compare(guess[column], secret.digit_at(column));
        }
        result
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }

    /// Arrow hint pointing towards the secret digit
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::TooLow => '↑',
            Self::Exact => '=',
            Self::TooHigh => '↓',
        }
    }

    /// Square emoji: blue for too low, green for exact, red for too high
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::TooLow => '🟦',
            Self::Exact => '🟩',
            Self::TooHigh => '🟥',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(ch: char) -> HexDigit {
        HexDigit::from_char(ch).unwrap()
    }

    fn digits(s: &str) -> [HexDigit; CODE_LEN] {
        let secret: Secret = s.parse().unwrap();
        *secret.digits()
    }

    #[test]
    fn compare_three_outcomes() {
        assert_eq!(Feedback::compare(digit('3'), digit('7')), Feedback::TooLow);
        assert_eq!(Feedback::compare(digit('7'), digit('7')), Feedback::Exact);
        assert_eq!(Feedback::compare(digit('f'), digit('7')), Feedback::TooHigh);
    }

    #[test]
    fn compare_uses_numeric_value_across_letter_boundary() {
        assert_eq!(Feedback::compare(digit('9'), digit('a')), Feedback::TooLow);
        assert_eq!(Feedback::compare(digit('f'), digit('0')), Feedback::TooHigh);
    }

    #[test]
    fn row_all_exact() {
        let secret: Secret = "a1b2c3".parse().unwrap();
        let result = Feedback::row(secret.digits(), &secret);
        assert!(result.iter().all(|f| f.is_exact()));
    }

    #[test]
    fn row_columns_are_independent() {
        // Digits present elsewhere in the secret earn nothing extra
        let secret: Secret = "123456".parse().unwrap();
        let result = Feedback::row(&digits("654321"), &secret);
        assert_eq!(
            result,
            [
                Feedback::TooHigh,
                Feedback::TooHigh,
                Feedback::TooHigh,
                Feedback::TooLow,
                Feedback::TooLow,
                Feedback::TooLow,
            ]
        );
    }

    #[test]
    fn row_all_too_high_against_zeros() {
        let secret: Secret = "000000".parse().unwrap();
        let result = Feedback::row(&digits("111111"), &secret);
        assert!(result.iter().all(|&f| f == Feedback::TooHigh));
    }

    #[test]
    fn arrows_point_towards_secret() {
        assert_eq!(Feedback::TooLow.arrow(), '↑');
        assert_eq!(Feedback::TooHigh.arrow(), '↓');
        assert_eq!(Feedback::Exact.arrow(), '=');
    }
}
