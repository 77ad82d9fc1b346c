//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot into a
//! character framebuffer, and the renderer flushes that framebuffer to the
//! terminal, sending only the cells that changed since the last frame.
//!
//! Board cells are drawn two columns wide so they look roughly square.

pub mod fb;
pub mod game_view;
pub mod hud;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use hud::Hud;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
