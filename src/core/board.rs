//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a block color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (col, row) where col ranges 0..9 (left to right), row ranges
//! 0..19 (top to bottom). Falling pieces may sit above the grid (negative
//! rows); those coordinates are never stored here, only tested against.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i8 || row < 0 || row >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (col, row). Returns None if out of bounds.
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// True iff (col, row) is in bounds and holds the empty sentinel.
    ///
    /// Callers testing hypothetical piece placements must bounds-check rows
    /// above the grid themselves; a negative row is simply not empty here.
    pub fn is_empty(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(None))
    }

    /// Set cell at (col, row). Returns false if out of bounds.
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Collapse one row: rows above shift down by one, row 0 becomes empty.
    fn collapse_row(&mut self, row: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges safely.
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            let dst_start = r * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear every completed row and return how many were cleared.
    ///
    /// Rows are scanned top to bottom in a single pass, each full row
    /// collapsed at its original index. Collapsing only moves rows above the
    /// cleared one, so full rows further down keep their completeness and are
    /// caught later in the same pass.
    pub fn clear_completed_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for row in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to a 2D vector for tests/display
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let width = BOARD_WIDTH as usize;
        (0..BOARD_HEIGHT as usize)
            .map(|row| {
                let start = row * width;
                self.cells[start..start + width].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
