//! Falling-block puzzle game (workspace facade crate).
//!
//! Re-exports the member crates under stable short names so the binary,
//! integration tests and benchmarks can write `falling_blocks::core::...`.

pub mod config;

pub use falling_blocks_audio as audio;
pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;
