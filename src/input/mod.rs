//! Input module - keyboard to game-event translation.

pub mod handler;

pub use handler::{should_quit, InputHandler};
