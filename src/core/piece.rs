//! Piece module - the falling tetromino
//!
//! A `FallingPiece` owns its rotation-state sequence, anchor position, fill
//! color, descent timer and locked flag. It never indexes the board's storage
//! directly; all collision and locking goes through `Board::is_empty` /
//! `Board::set`.

use crate::core::board::Board;
use crate::core::shapes::{occupied_cells, rotation_states, RotationGrid, ROTATION_COUNT};
use crate::types::{
    BlockColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, DESCEND_INTERVAL_TICKS, SOFT_DROP_INTERVAL_TICKS,
    SPAWN_COL, SPAWN_ROW,
};

/// What a logical tick did to the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not a descent tick, or the piece is already locked.
    Idle,
    /// Descended one row.
    Descended,
    /// Downward movement was blocked; the piece locked into the board.
    /// `top_out` is true when any occupied cell was still above the grid.
    Locked { top_out: bool },
}

/// The active falling tetromino.
///
/// State machine: falling -> locked, nothing else. Once locked the piece's
/// cells belong to the board and the piece is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    pub kind: PieceKind,
    pub color: BlockColor,
    /// Board-relative anchor column of the rotation grid's top-left corner.
    pub col: i8,
    /// Anchor row; negative while the piece is still above the visible grid.
    pub row: i8,
    rotation: usize,
    timer: u64,
    locked: bool,
}

impl FallingPiece {
    /// Create a piece at the spawn anchor, above the visible grid.
    pub fn new(kind: PieceKind, color: BlockColor) -> Self {
        Self {
            kind,
            color,
            col: SPAWN_COL,
            row: SPAWN_ROW,
            rotation: 0,
            timer: 0,
            locked: false,
        }
    }

    /// The currently active rotation state.
    pub fn active_grid(&self) -> &'static RotationGrid {
        &rotation_states(self.kind)[self.rotation]
    }

    /// The base (spawn) rotation state, used for previews.
    pub fn preview_grid(&self) -> &'static RotationGrid {
        &rotation_states(self.kind)[0]
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Test a hypothetical placement of `grid` at the current anchor plus
    /// (d_col, d_row).
    ///
    /// Occupied cells collide when their column leaves [0, width) or their
    /// row reaches the bottom bound. Rows above the grid skip the occupancy
    /// test (the piece is allowed to hang off the top while spawning), but
    /// column bounds still apply there.
    pub fn would_collide_with(&self, board: &Board, d_col: i8, d_row: i8, grid: &RotationGrid) -> bool {
        for (dc, dr) in occupied_cells(grid) {
            let col = self.col + dc + d_col;
            let row = self.row + dr + d_row;
            if col < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
                return true;
            }
            if row < 0 {
                continue;
            }
            if !board.is_empty(col, row) {
                return true;
            }
        }
        false
    }

    /// Test a hypothetical offset of the current rotation state.
    pub fn would_collide(&self, board: &Board, d_col: i8, d_row: i8) -> bool {
        self.would_collide_with(board, d_col, d_row, self.active_grid())
    }

    /// Commit the offset iff it does not collide. Returns whether it moved.
    pub fn try_move(&mut self, board: &Board, d_col: i8, d_row: i8) -> bool {
        if self.would_collide(board, d_col, d_row) {
            return false;
        }
        self.col += d_col;
        self.row += d_row;
        true
    }

    /// Advance to the next rotation state, with a one-cell wall kick.
    ///
    /// If the target state collides in place, a single horizontal kick is
    /// tried: left when the anchor is past the board's midpoint, right
    /// otherwise. The rotation commits only if the (possibly kicked)
    /// placement is free; otherwise state is unchanged.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let next_index = (self.rotation + 1) % ROTATION_COUNT;
        let next = &rotation_states(self.kind)[next_index];

        let kick = if self.would_collide_with(board, 0, 0, next) {
            if self.col > (BOARD_WIDTH as i8) / 2 {
                -1
            } else {
                1
            }
        } else {
            0
        };

        if self.would_collide_with(board, kick, 0, next) {
            return false;
        }

        self.col += kick;
        self.rotation = next_index;
        true
    }

    /// Run one logical tick: descend when due, lock when descent is blocked.
    ///
    /// The piece descends on ticks where the counter is a multiple of the
    /// descent interval, and additionally on multiples of the shorter
    /// soft-drop interval while soft drop is held. The counter is consulted
    /// before it increments, so a fresh piece descends on its first tick.
    pub fn tick(&mut self, board: &mut Board, soft_drop: bool) -> TickOutcome {
        if self.locked {
            return TickOutcome::Idle;
        }

        let due = self.timer % DESCEND_INTERVAL_TICKS == 0
            || (soft_drop && self.timer % SOFT_DROP_INTERVAL_TICKS == 0);
        self.timer += 1;

        if !due {
            return TickOutcome::Idle;
        }

        if self.try_move(board, 0, 1) {
            TickOutcome::Descended
        } else {
            let top_out = self.lock(board);
            TickOutcome::Locked { top_out }
        }
    }

    /// Write every occupied cell into the board and mark the piece locked.
    ///
    /// Cells still above the grid are not written; any such cell means the
    /// stack has reached the spawn zone and the lock reports top-out.
    pub fn lock(&mut self, board: &mut Board) -> bool {
        let mut top_out = false;
        for (dc, dr) in occupied_cells(self.active_grid()) {
            let row = self.row + dr;
            if row < 0 {
                top_out = true;
                continue;
            }
            board.set(self.col + dc, row, Some(self.color));
        }
        self.locked = true;
        top_out
    }
}
