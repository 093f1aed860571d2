//! blockfall - a terminal falling-block puzzle game.
//!
//! The `core` module is pure logic (board, shape catalog, falling piece,
//! game state); `input`, `term`, and `persist` are the thin presentation,
//! input, and storage layers around it.

pub mod core;
pub mod input;
pub mod persist;
pub mod term;
pub mod types;
