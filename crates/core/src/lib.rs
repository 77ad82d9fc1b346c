//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state machine. It has no
//! dependencies on the terminal, audio or any other I/O, so it can be driven
//! from a frame loop, a test or a benchmark alike.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 board with collision, merge and line clearing
//! - [`game_state`]: piece controller and Running/Paused/GameOver machine
//! - [`pieces`]: tetromino catalog and matrix rotation
//! - [`rng`]: seeded uniform piece selection and scripted sequences
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every new piece is one of seven kinds with equal
//!   probability, independent of earlier draws
//! - **Matrix rotation**: 90° index transform, rejected outright on collision
//! - **Immediate lock**: a piece locks as soon as it cannot step down
//! - **Hold**: once per lock cycle
//! - **Scoring**: 100 points per cleared line, no level or combo bonus
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{GameState, PieceSource};
//! use falling_blocks_core::types::{GameAction, PieceKind};
//!
//! let mut game = GameState::with_source(PieceSource::sequence(vec![PieceKind::O]));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::update`](game_state::GameState::update) once
//! per frame with the elapsed milliseconds. When the accumulated time
//! exceeds the drop interval (1000ms by default) the piece steps down one
//! row and the accumulator restarts.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, GameStatus};
pub use pieces::{base_shape, hold_offset, random_piece, Piece, Shape, NEXT_OFFSET};
pub use rng::{PieceSource, SimpleRng};
pub use snapshot::GameSnapshot;
