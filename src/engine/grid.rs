//! Guess grid and cursor
//!
//! The grid is a fixed `ROWS × COLS` array of cells. Rows are plain values
//! stored inline, so writing to one row can never touch another.

use crate::core::{CODE_LEN, Feedback, HexDigit};

/// Number of attempts per game
pub const ROWS: usize = 6;

/// Digits per attempt
pub const COLS: usize = CODE_LEN;

/// One square of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub symbol: Option<HexDigit>,
    /// Set once the row has been submitted
    pub feedback: Option<Feedback>,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.symbol.is_some()
    }
}

/// Position of the editable cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

/// All guesses and their feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grid {
    rows: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// An empty grid
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn cell(&self, row: usize, column: usize) -> &Cell {
        &self.rows[row][column]
    }

    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> &[Cell; COLS] {
        &self.rows[row]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.rows.iter()
    }

    /// Whether every cell of `row` holds a symbol
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows[row].iter().all(Cell::is_filled)
    }

    /// Digits of a row, or `None` if any cell is empty
    #[must_use]
    pub fn row_digits(&self, row: usize) -> Option<[HexDigit; COLS]> {
        let mut digits = [HexDigit::ALL[0]; COLS];
        for (slot, cell) in digits.iter_mut().zip(&self.rows[row]) {
            *slot = cell.symbol?;
        }
        Some(digits)
    }

    /// Number of submitted rows
    #[must_use]
    pub fn submitted_rows(&self) -> usize {
        self.rows
            .iter()
            .take_while(|row| row.iter().all(|cell| cell.feedback.is_some()))
            .count()
    }

    pub(crate) fn set_symbol(&mut self, row: usize, column: usize, symbol: Option<HexDigit>) {
        self.rows[row][column].symbol = symbol;
    }

    pub(crate) fn set_feedback(&mut self, row: usize, feedback: [Feedback; COLS]) {
        for (cell, value) in self.rows[row].iter_mut().zip(feedback) {
            cell.feedback = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        assert!(
            grid.rows()
                .flatten()
                .all(|cell| cell.symbol.is_none() && cell.feedback.is_none())
        );
        assert_eq!(grid.submitted_rows(), 0);
    }

    #[test]
    fn rows_do_not_alias() {
        let mut grid = Grid::new();
        grid.set_symbol(0, 0, HexDigit::from_char('a'));

        assert!(grid.cell(0, 0).is_filled());
        for row in 1..ROWS {
            assert!(!grid.cell(row, 0).is_filled(), "row {row} aliases row 0");
        }
    }

    #[test]
    fn row_digits_requires_full_row() {
        let mut grid = Grid::new();
        for column in 0..COLS - 1 {
            grid.set_symbol(0, column, HexDigit::from_char('1'));
        }
        assert!(!grid.is_row_full(0));
        assert!(grid.row_digits(0).is_none());

        grid.set_symbol(0, COLS - 1, HexDigit::from_char('2'));
        assert!(grid.is_row_full(0));
        let digits = grid.row_digits(0).unwrap();
        assert_eq!(digits[COLS - 1].to_char(), '2');
    }

    #[test]
    fn submitted_rows_counts_feedback() {
        let mut grid = Grid::new();
        grid.set_feedback(0, [Feedback::Exact; COLS]);
        grid.set_feedback(1, [Feedback::TooLow; COLS]);
        assert_eq!(grid.submitted_rows(), 2);
    }
}
