//! Terminal input module.
//!
//! Maps `crossterm` key events into [`KeyCommand`]s: game actions for the
//! state machine plus host-level commands (music) that never reach it.
//! Quit detection is kept separate so the frame loop can exit before
//! dispatching anything.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{handle_key_event, should_quit, KeyCommand};
