//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, usable from the game core, the
//! terminal renderer and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0) for every piece
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the host loop (~60 FPS) |
//! | `DEFAULT_DROP_INTERVAL_MS` | 1000 | Automatic fall interval |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), Color::from_hex(0xa000f0));
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column where new, promoted and swapped pieces appear
pub const SPAWN_X: i8 = 3;

/// Row where new, promoted and swapped pieces appear
pub const SPAWN_Y: i8 = 0;

/// Fixed frame interval of the host loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Automatic fall interval (1000ms = one row per second)
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared line. No combo or multi-line tiers.
pub const POINTS_PER_LINE: u32 = 100;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single uppercase letter, as shown in panels.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Color used for the piece and for every cell it locks into.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::from_hex(0x00f0f0),
            PieceKind::J => Color::from_hex(0x0000f0),
            PieceKind::L => Color::from_hex(0xf0a000),
            PieceKind::O => Color::from_hex(0xf0f000),
            PieceKind::S => Color::from_hex(0x00f000),
            PieceKind::T => Color::from_hex(0xa000f0),
            PieceKind::Z => Color::from_hex(0xf00000),
        }
    }
}

/// 24-bit color identifier stored in locked board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lighten (`percent > 0`) or darken (`percent < 0`) toward white/black.
    ///
    /// Each channel moves `percent`% of the way to the target, rounded.
    ///
    /// ```
    /// use falling_blocks_types::Color;
    ///
    /// let c = Color::from_hex(0x808080);
    /// assert_eq!(c.shade(0), c);
    /// assert_eq!(c.shade(100), Color::from_hex(0xffffff));
    /// assert_eq!(c.shade(-100), Color::from_hex(0x000000));
    /// ```
    pub fn shade(&self, percent: i32) -> Self {
        let target: f32 = if percent < 0 { 0.0 } else { 255.0 };
        let p = percent.unsigned_abs().min(100) as f32 * 0.01;
        let channel = |c: u8| {
            let c = c as f32;
            (((target - c) * p).round() + c).clamp(0.0, 255.0) as u8
        };
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Operations the input dispatcher can invoke on the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Step piece one row down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Swap with the held piece (once per lock)
    Hold,
    /// Toggle pause state
    Pause,
    /// Start over with a fresh board
    Restart,
    /// Show or hide the ghost piece
    ToggleGhost,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use falling_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATECCW"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            "toggleghost" => Some(GameAction::ToggleGhost),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::ToggleGhost => "toggleGhost",
        }
    }
}

/// Notification recorded by the game state after a transition.
///
/// Presentation layers drain these to update counters and modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece was merged into the board.
    Locked { lines_cleared: u32 },
    /// Score or line counter changed (after a clear, or on reset).
    ScoreChanged { score: u32, lines: u32 },
    /// Pause was entered or left.
    PauseChanged { paused: bool },
    /// A freshly placed piece collided; the game is over.
    GameOver { final_score: u32 },
    /// The game was re-initialized.
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_colors_match_palette() {
        assert_eq!(PieceKind::I.color().to_hex(), 0x00f0f0);
        assert_eq!(PieceKind::J.color().to_hex(), 0x0000f0);
        assert_eq!(PieceKind::L.color().to_hex(), 0xf0a000);
        assert_eq!(PieceKind::O.color().to_hex(), 0xf0f000);
        assert_eq!(PieceKind::S.color().to_hex(), 0x00f000);
        assert_eq!(PieceKind::T.color().to_hex(), 0xa000f0);
        assert_eq!(PieceKind::Z.color().to_hex(), 0xf00000);
    }

    #[test]
    fn shade_moves_channels_toward_target() {
        let c = Color::from_hex(0xf0a000);
        // 20% lighter: 240 + round(15*0.2)=243, 160 + round(95*0.2)=179, 0 + 51
        assert_eq!(c.shade(20), Color::new(243, 179, 51));
        // 20% darker: 240 - 48, 160 - 32, 0
        assert_eq!(c.shade(-20), Color::new(192, 128, 0));
    }

    #[test]
    fn action_names_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Hold,
            GameAction::Pause,
            GameAction::Restart,
            GameAction::ToggleGhost,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn spawn_and_timing_defaults() {
        assert_eq!((SPAWN_X, SPAWN_Y), (3, 0));
        assert_eq!(DEFAULT_DROP_INTERVAL_MS, 1000);
        assert_eq!(POINTS_PER_LINE, 100);
    }
}
