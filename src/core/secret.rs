//! The hidden 6-digit hex code
//!
//! A `Secret` is generated once per game from a random source and stays
//! immutable until the engine is reset.

use super::digit::{HexDigit, RADIX};
use super::error::ParseError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of digits in a hex color code
pub const CODE_LEN: usize = 6;

/// The target color code the player must guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret([HexDigit; CODE_LEN]);

impl Secret {
    /// Create a secret from its digits
    #[inline]
    #[must_use]
    pub const fn new(digits: [HexDigit; CODE_LEN]) -> Self {
        Self(digits)
    }

    /// Generate a secret with six independent uniform picks from `0-f`
    ///
    /// # Examples
    /// ```
    /// use hexle::core::Secret;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let secret = Secret::generate(&mut rng);
    /// assert_eq!(secret.to_string().len(), 6);
    /// ```
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [HexDigit::ALL[0]; CODE_LEN];
        for digit in &mut digits {
            *digit = HexDigit::ALL[usize::from(rng.random_range(0..RADIX))];
        }
        Self(digits)
    }

    /// Digits in order, most significant first
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[HexDigit; CODE_LEN] {
        &self.0
    }

    /// Digit at a column (0-5)
    ///
    /// # Panics
    /// Panics if `column >= 6`
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, column: usize) -> HexDigit {
        self.0[column]
    }

    /// Red, green and blue channels of `#rrggbb`
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| self.0[i].value() * RADIX + self.0[i + 1].value();
        (channel(0), channel(2), channel(4))
    }

    /// Black or white, whichever reads better on top of [`Secret::rgb`]
    ///
    /// Uses the WCAG relative luminance of the color with a 0.179 threshold.
    #[must_use]
    pub fn contrast_rgb(&self) -> (u8, u8, u8) {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        let (r, g, b) = self.rgb();
        let luminance = 0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b);
        if luminance > 0.179 {
            (0, 0, 0)
        } else {
            (255, 255, 255)
        }
    }
}

impl FromStr for Secret {
    type Err = ParseError;

    /// Parse `rrggbb` or `#rrggbb`, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let count = s.chars().count();
        if count != CODE_LEN {
            return Err(ParseError::InvalidLength(count));
        }

        let mut digits = [HexDigit::ALL[0]; CODE_LEN];
        for (slot, ch) in digits.iter_mut().zip(s.chars()) {
            *slot = HexDigit::from_char(ch.to_ascii_lowercase())
                .ok_or(ParseError::InvalidDigit(ch))?;
        }

        Ok(Self(digits))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_valid() {
        let secret: Secret = "a1b2c3".parse().unwrap();
        assert_eq!(secret.to_string(), "a1b2c3");
        assert_eq!(secret.digit_at(0).value(), 10);
        assert_eq!(secret.digit_at(5).value(), 3);
    }

    #[test]
    fn parse_accepts_hash_and_uppercase() {
        let secret: Secret = "#A1B2C3".parse().unwrap();
        assert_eq!(secret.to_string(), "a1b2c3");
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!(
            "abc".parse::<Secret>(),
            Err(ParseError::InvalidLength(3))
        );
        assert_eq!(
            "a1b2c3d".parse::<Secret>(),
            Err(ParseError::InvalidLength(7))
        );
        assert_eq!("".parse::<Secret>(), Err(ParseError::InvalidLength(0)));
    }

    #[test]
    fn parse_invalid_digit() {
        assert_eq!(
            "a1b2cz".parse::<Secret>(),
            Err(ParseError::InvalidDigit('z'))
        );
    }

    #[test]
    fn generate_is_deterministic_for_seed() {
        let a = Secret::generate(&mut StdRng::seed_from_u64(42));
        let b = Secret::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn generate_covers_alphabet() {
        // 200 secrets = 1200 picks; every symbol should show up
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 16];
        for _ in 0..200 {
            for digit in Secret::generate(&mut rng).digits() {
                seen[usize::from(digit.value())] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn rgb_channels() {
        let secret: Secret = "ff8000".parse().unwrap();
        assert_eq!(secret.rgb(), (255, 128, 0));
    }

    #[test]
    fn contrast_picks_black_on_light_and_white_on_dark() {
        let light: Secret = "ffffff".parse().unwrap();
        let dark: Secret = "000000".parse().unwrap();
        let yellow: Secret = "ffff00".parse().unwrap();
        let navy: Secret = "000080".parse().unwrap();

        assert_eq!(light.contrast_rgb(), (0, 0, 0));
        assert_eq!(dark.contrast_rgb(), (255, 255, 255));
        assert_eq!(yellow.contrast_rgb(), (0, 0, 0));
        assert_eq!(navy.contrast_rgb(), (255, 255, 255));
    }
}
