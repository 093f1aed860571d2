//! Terminal rendering module.
//!
//! Renders into a simple framebuffer that is flushed to the terminal with
//! diffed redraws. `GameView` stays pure so the mapping from game state to
//! screen can be unit-tested.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
