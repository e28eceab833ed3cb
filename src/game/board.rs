//! Square board for Drop Token: token placement and outcome detection.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's fixed position in the original join order (0 or 1 in the
/// two-player configuration), used as the occupant marker on the board.
pub type Slot = usize;

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No token has landed here.
    Empty,
    /// A token owned by the player with this slot index.
    Token(Slot),
}

/// Errors that can occur when dropping a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DropError {
    /// The column index is outside the board.
    #[display("column is out of bounds")]
    ColumnOutOfBounds,
    /// Every row of the column is already occupied.
    #[display("column is full")]
    ColumnFull,
}

/// Outcome of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOutcome {
    /// Tokens can still be dropped.
    InProgress,
    /// No further tokens can decide the game: `Some(slot)` owns a winning
    /// line, `None` is a tie.
    Done(Option<Slot>),
}

/// N×N grid of cells, flattened row-major with row 0 at the bottom.
///
/// Position `p` holds row `p / size`, column `p % size`. Tokens only enter
/// through [`Board::drop_token`], so occupied cells in a column always form
/// a contiguous run starting at row 0 (gravity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Edge length of the square grid.
    size: usize,
    /// Flattened cells, `size * size` entries.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` × `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at the given row and column, or `None` when either
    /// index is outside the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.size || column >= self.size {
            return None;
        }
        self.cells.get(row * self.size + column).copied()
    }

    /// Returns all cells in flattened position order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Drops a token into `column`; it falls to the lowest unoccupied row.
    ///
    /// Returns the row the token landed in.
    ///
    /// # Errors
    ///
    /// Returns [`DropError`] when the column is outside the board or full.
    /// The board is left untouched on error.
    #[instrument(skip(self))]
    pub fn drop_token(&mut self, column: usize, slot: Slot) -> Result<usize, DropError> {
        if column >= self.size {
            return Err(DropError::ColumnOutOfBounds);
        }

        // Climb the column until the first empty cell.
        let mut position = column;
        while position < self.cells.len() && self.cells[position] != Cell::Empty {
            position += self.size;
        }

        if position >= self.cells.len() {
            return Err(DropError::ColumnFull);
        }

        self.cells[position] = Cell::Token(slot);
        Ok(position / self.size)
    }

    /// Computes the outcome of the current position.
    ///
    /// Lines are scanned in a fixed order: rows, then columns, then the
    /// diagonal and the anti-diagonal. A line only wins when all `size` of
    /// its cells hold the same non-empty occupant. With no winning line, a
    /// full board is a tie and anything else is still in progress.
    pub fn outcome(&self) -> BoardOutcome {
        for row in 0..self.size {
            let line = (0..self.size).map(|column| row * self.size + column);
            if let Some(slot) = self.line_winner(line) {
                return BoardOutcome::Done(Some(slot));
            }
        }

        for column in 0..self.size {
            let line = (0..self.size).map(|row| row * self.size + column);
            if let Some(slot) = self.line_winner(line) {
                return BoardOutcome::Done(Some(slot));
            }
        }

        let diagonal = (0..self.size).map(|i| i * self.size + i);
        if let Some(slot) = self.line_winner(diagonal) {
            return BoardOutcome::Done(Some(slot));
        }

        let anti_diagonal = (0..self.size).map(|i| i * self.size + (self.size - i - 1));
        if let Some(slot) = self.line_winner(anti_diagonal) {
            return BoardOutcome::Done(Some(slot));
        }

        if self.is_full() {
            BoardOutcome::Done(None)
        } else {
            BoardOutcome::InProgress
        }
    }

    /// Returns the occupant of a complete uniform line, if any. An empty
    /// cell anywhere in the line disqualifies it.
    fn line_winner(&self, mut positions: impl Iterator<Item = usize>) -> Option<Slot> {
        let first = positions.next()?;
        match self.cells[first] {
            Cell::Empty => None,
            Cell::Token(slot) => positions
                .all(|position| self.cells[position] == Cell::Token(slot))
                .then_some(slot),
        }
    }
}
