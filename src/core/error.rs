//! Errors for parsing user-supplied hex codes
//!
//! Only text entering from outside the game (command-line arguments) is
//! parsed fallibly. Keystrokes never produce errors.

use thiserror::Error;

/// Error type for invalid hex codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("hex code must be exactly 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a hexadecimal digit")]
    InvalidDigit(char),
}
