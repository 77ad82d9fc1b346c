//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of
//! the piece that locked into it. Storage is an owned array of rows indexed
//! `[row][col]`, so removing a line is a single row shift.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). The in-flight piece is never stored here.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Board width as an index type
pub const COLS: usize = BOARD_WIDTH as usize;

/// Board height as an index type
pub const ROWS: usize = BOARD_HEIGHT as usize;

/// One board row
pub type Row = [Cell; COLS];

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; COLS]; ROWS],
        }
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < COLS && y >= 0 && (y as usize) < ROWS
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::in_bounds(x, y).then(|| self.rows[y as usize][x as usize])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Whether `piece` overlaps a wall, the floor, or a locked cell.
    ///
    /// Cells above the top edge (y < 0) only collide with the side walls;
    /// they never test against board contents.
    pub fn collide(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y)| {
            if x < 0 || x as usize >= COLS || (y >= 0 && y as usize >= ROWS) {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write the piece's color into every board cell it covers.
    ///
    /// The caller has already found the resting position. Cells above the
    /// top edge cannot be stored and are skipped; returns false if any were.
    pub fn merge(&mut self, piece: &Piece) -> bool {
        let mut all_stored = true;
        for (x, y) in piece.cells() {
            if !self.set(x, y, Some(piece.color)) {
                all_stored = false;
            }
        }
        all_stored
    }

    /// Remove every full row, inserting an empty row at the top for each.
    ///
    /// Rows are scanned bottom to top and the same index is examined again
    /// after a removal, since the rows above have shifted down into it.
    /// Returns the pre-clear indices of the removed rows, bottom first.
    pub fn clear_lines(&mut self) -> ArrayVec<usize, ROWS> {
        let mut cleared = ArrayVec::new();
        let mut y = ROWS;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                // Rows already shifted by earlier removals sit `len` lower.
                cleared.push(row - cleared.len());
                self.rows.copy_within(0..row, 1);
                self.rows[0] = [None; COLS];
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// All rows, top first.
    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.rows = [[None; COLS]; ROWS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
