//! Read-only view of the game for renderers.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::board::{Row, COLS, ROWS};
use crate::pieces::Piece;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameSnapshot {
    pub board: [Row; ROWS],
    pub current: Piece,
    /// Landing position of `current`; `None` while the ghost is hidden.
    pub ghost: Option<Piece>,
    pub next: Piece,
    pub held: Option<Piece>,
    pub can_hold: bool,
    pub score: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Locked cell at (x, y); `None` for empty or out of range.
    pub fn cell(&self, x: usize, y: usize) -> crate::types::Cell {
        self.board.get(y).and_then(|row| row.get(x)).copied().flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; COLS]; ROWS],
            current: Piece::new(PieceKind::O),
            ghost: None,
            next: Piece::new(PieceKind::O),
            held: None,
            can_hold: true,
            score: 0,
            lines: 0,
            paused: false,
            game_over: false,
        }
    }
}
