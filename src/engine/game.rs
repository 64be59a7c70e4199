//! The guess engine: input state machine and row evaluation
//!
//! All operations are synchronous and infallible. Input that cannot be
//! applied (a non-hex key, an incomplete row, anything after the game has
//! ended) leaves the state untouched. Every operation hands back a
//! [`Snapshot`] of the updated state for the presentation layer.

use super::grid::{COLS, Cursor, Grid, ROWS};
use crate::core::{Feedback, HexDigit, Secret};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Game state machine: `InProgress → {Won, Lost}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Horizontal cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Read-only view of everything the presentation layer renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub cursor: Cursor,
    pub outcome: Outcome,
}

/// One game session: secret, grid, cursor and outcome
///
/// The secret is only readable through [`GuessEngine::revealed_secret`],
/// which returns `None` until the game is over.
pub struct GuessEngine<R = StdRng> {
    secret: Secret,
    grid: Grid,
    cursor: Cursor,
    outcome: Outcome,
    rng: R,
}

impl GuessEngine<StdRng> {
    /// Start a game with an OS-seeded random source
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Start a game whose secrets are reproducible from `seed`
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GuessEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GuessEngine<R> {
    /// Start a game, drawing the first secret from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let secret = Secret::generate(&mut rng);
        info!("New game started");
        Self::with_secret(secret, rng)
    }

    /// Start a game against a known secret
    ///
    /// `rng` is kept for later calls to [`GuessEngine::reset`].
    pub fn with_secret(secret: Secret, rng: R) -> Self {
        Self {
            secret,
            grid: Grid::new(),
            cursor: Cursor::default(),
            outcome: Outcome::InProgress,
            rng,
        }
    }

    /// Current observable state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            cursor: self.cursor,
            outcome: self.outcome,
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of rows submitted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.grid.submitted_rows()
    }

    /// The secret, once the game is won or lost
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Secret> {
        self.outcome.is_terminal().then_some(&self.secret)
    }

    /// Color of the secret code, shown as the puzzle's clue
    #[must_use]
    pub fn target_rgb(&self) -> (u8, u8, u8) {
        self.secret.rgb()
    }

    /// Black or white, readable on top of [`GuessEngine::target_rgb`]
    #[must_use]
    pub fn target_contrast_rgb(&self) -> (u8, u8, u8) {
        self.secret.contrast_rgb()
    }

    /// Write `symbol` at the cursor and advance one column
    ///
    /// Ignored unless `symbol` is one of `0-9a-f`, the game is in progress,
    /// and the current row still has an empty cell. The cursor stops on the
    /// last column rather than running off the row.
    pub fn insert_digit(&mut self, symbol: char) -> Snapshot {
        let Some(digit) = HexDigit::from_char(symbol) else {
            trace!(?symbol, "Ignoring non-hex key");
            return self.snapshot();
        };
        if self.outcome.is_terminal() || self.grid.is_row_full(self.cursor.row) {
            trace!(?symbol, "Ignoring digit: no free cell");
            return self.snapshot();
        }

        self.grid
            .set_symbol(self.cursor.row, self.cursor.column, Some(digit));
        self.cursor.column = (self.cursor.column + 1).min(COLS - 1);
        self.snapshot()
    }

    /// Clear the cell before the cursor and step back one column
    ///
    /// The cleared cell is `max(column - 1, 0)`, so on column 0 the first cell
    /// itself is cleared.
    pub fn delete_digit(&mut self) -> Snapshot {
        if self.outcome.is_terminal() {
            return self.snapshot();
        }

        let target = self.cursor.column.saturating_sub(1);
        self.grid.set_symbol(self.cursor.row, target, None);
        self.cursor.column = self.cursor.column.saturating_sub(1);
        self.snapshot()
    }

    /// Move the cursor within the current row
    ///
    /// Moving right is only allowed from a filled cell, so the cursor never
    /// skips over a gap.
    pub fn move_cursor(&mut self, direction: Direction) -> Snapshot {
        if self.outcome.is_terminal() {
            return self.snapshot();
        }

        match direction {
            Direction::Left => {
                self.cursor.column = self.cursor.column.saturating_sub(1);
            }
            Direction::Right => {
                if self
                    .grid
                    .cell(self.cursor.row, self.cursor.column)
                    .is_filled()
                {
                    self.cursor.column = (self.cursor.column + 1).min(COLS - 1);
                }
            }
        }
        self.snapshot()
    }

    /// Evaluate the current row
    ///
    /// Ignored if any cell in the row is empty. Otherwise feedback is stored
    /// for every column, then the win check runs before the last-row check,
    /// so a correct guess on the final row still wins.
    pub fn submit_row(&mut self) -> Snapshot {
        if self.outcome.is_terminal() {
            return self.snapshot();
        }
        let row = self.cursor.row;
        let Some(guess) = self.grid.row_digits(row) else {
            trace!(row, "Ignoring submit: row incomplete");
            return self.snapshot();
        };

        let feedback = Feedback::row(&guess, &self.secret);
        self.grid.set_feedback(row, feedback);

        if feedback.iter().all(|f| f.is_exact()) {
            self.outcome = Outcome::Won;
            info!(attempts = row + 1, secret = %self.secret, "Game won");
        } else if row == ROWS - 1 {
            self.outcome = Outcome::Lost;
            info!(secret = %self.secret, "Game lost");
        } else {
            self.cursor = Cursor {
                row: row + 1,
                column: 0,
            };
            debug!(row, "Row submitted");
        }
        self.snapshot()
    }

    /// Draw a fresh secret and return to the empty start state
    pub fn reset(&mut self) -> Snapshot {
        self.secret = Secret::generate(&mut self.rng);
        self.grid = Grid::new();
        self.cursor = Cursor::default();
        self.outcome = Outcome::InProgress;
        info!("Game reset");
        self.snapshot()
    }
}
