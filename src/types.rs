//! Core types shared across the application
//! This module contains pure data types with no I/O dependencies

use serde::{Deserialize, Serialize};

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Logical tick rate: 60 ticks per second.
pub const TICK_MS: u32 = 1000 / 60;

/// Gravity: a piece descends once per this many ticks (1 second).
pub const DESCEND_INTERVAL_TICKS: u64 = 60;

/// Soft drop: while held, the piece additionally descends once per this many
/// ticks (250 ms).
pub const SOFT_DROP_INTERVAL_TICKS: u64 = 15;

/// Spawn anchor for new pieces. The row is negative so the piece enters the
/// visible grid gradually from above.
pub const SPAWN_COL: i8 = 4;
pub const SPAWN_ROW: i8 = -4;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order (used for uniform random choice).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Fill colors for locked and falling blocks.
///
/// Color is cosmetic and chosen independently of the piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Green,
    Orange,
    Red,
    Blue,
    Purple,
}

impl BlockColor {
    /// The palette, in order (used for uniform random choice).
    pub const PALETTE: [BlockColor; 5] = [
        BlockColor::Green,
        BlockColor::Orange,
        BlockColor::Red,
        BlockColor::Blue,
        BlockColor::Purple,
    ];
}

/// Cell on the board (None = empty, Some = filled with a block color)
pub type Cell = Option<BlockColor>;

/// Discrete input events delivered to the game state.
///
/// These are the only ways input mutates the game; unrecognized keys never
/// produce an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Rotate,
    MoveLeft,
    MoveRight,
    SoftDropStart,
    SoftDropEnd,
    Start,
}

/// Points awarded per cleared row.
pub const POINTS_PER_ROW: u32 = 10;

/// Best-ever records, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScores {
    pub score: u32,
    pub lines: u32,
}
