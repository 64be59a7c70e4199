//! Hexadecimal digit representation
//!
//! A `HexDigit` is one symbol from `0-9a-f`, stored as its numeric value.

use std::fmt;

/// Number of symbols in the hexadecimal alphabet
pub const RADIX: u8 = 16;

/// A single hexadecimal digit (numeric value 0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexDigit(u8);

impl HexDigit {
    /// Every digit in ascending order, `0` through `f`
    pub const ALL: [Self; 16] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
        Self(12),
        Self(13),
        Self(14),
        Self(15),
    ];

    /// Create a digit from its numeric value
    ///
    /// Returns `None` if `value >= 16`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < RADIX { Some(Self(value)) } else { None }
    }

    /// Parse a digit from one of the sixteen lowercase symbols `0-9a-f`
    ///
    /// Uppercase letters are rejected: the game keyboard only produces
    /// lowercase symbols, and callers that accept free text normalise first.
    ///
    /// # Examples
    /// ```
    /// use hexle::core::HexDigit;
    ///
    /// assert_eq!(HexDigit::from_char('a').map(HexDigit::value), Some(10));
    /// assert!(HexDigit::from_char('A').is_none());
    /// assert!(HexDigit::from_char('g').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Self(ch as u8 - b'0')),
            'a'..='f' => Some(Self(ch as u8 - b'a' + 10)),
            _ => None,
        }
    }

    /// Numeric value (0-15)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Lowercase symbol for this digit
    #[must_use]
    pub const fn to_char(self) -> char {
        if self.0 < 10 {
            (b'0' + self.0) as char
        } else {
            (b'a' + self.0 - 10) as char
        }
    }
}

impl fmt::Display for HexDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
