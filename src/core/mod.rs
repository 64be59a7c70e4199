//! Core domain types for Hexle
//!
//! Pure value types: digits, the secret code, and per-digit feedback.
//! Nothing here holds game state.

mod digit;
mod error;
mod feedback;
mod secret;

pub use digit::{HexDigit, RADIX};
pub use error::ParseError;
pub use feedback::Feedback;
pub use secret::{CODE_LEN, Secret};
