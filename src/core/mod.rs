//! Core module - pure game logic with no external dependencies
//!
//! Board, shape catalog, falling piece and game state. It has zero
//! dependencies on UI, timing, or I/O; the runner drives it with discrete
//! ticks and input events.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shapes;

// Re-export commonly used types
pub use board::Board;
pub use game_state::GameState;
pub use piece::{FallingPiece, TickOutcome};
pub use rng::SimpleRng;
