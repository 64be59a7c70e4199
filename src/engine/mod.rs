//! Game engine
//!
//! Owns one game session: the grid of guesses, the cursor, the outcome,
//! and the secret being guessed.

mod game;
mod grid;
mod input;

pub use game::{Direction, GuessEngine, Outcome, Snapshot};
pub use grid::{COLS, Cell, Cursor, Grid, ROWS};
pub use input::{Key, guess_keys};
