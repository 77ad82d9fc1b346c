//! Game state module - piece controller and game state machine
//!
//! This module ties together the board, the piece catalog and the random
//! source. It owns every piece of mutable game state; renderers and input
//! dispatchers only read snapshots or invoke operations.
//!
//! States: Running, Paused, GameOver. Paused and Running toggle; GameOver is
//! entered whenever a freshly promoted or swapped piece collides and is left
//! only through [`GameState::reset`].

use crate::board::Board;
use crate::pieces::{random_piece, Piece};
use crate::rng::PieceSource;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Coarse lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    held: Option<Piece>,
    source: PieceSource,
    /// Hold is allowed once per lock cycle.
    can_hold: bool,
    score: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
    drop_counter_ms: u32,
    drop_interval_ms: u32,
    show_ghost: bool,
    /// Pending notifications for presentation layers.
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game drawing uniform random pieces from `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_source(PieceSource::random(seed))
    }

    /// Create a new game drawing pieces from `source`
    pub fn with_source(mut source: PieceSource) -> Self {
        let current = random_piece(&mut source);
        let next = random_piece(&mut source);
        Self {
            board: Board::new(),
            current,
            next,
            held: None,
            source,
            can_hold: true,
            score: 0,
            lines: 0,
            paused: false,
            game_over: false,
            drop_counter_ms: 0,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            show_ghost: true,
            events: Vec::new(),
        }
    }

    /// Override the automatic fall interval.
    pub fn with_drop_interval_ms(mut self, interval_ms: u32) -> Self {
        self.drop_interval_ms = interval_ms.max(1);
        self
    }

    /// Start with the ghost piece hidden or shown.
    pub fn with_ghost(mut self, show: bool) -> Self {
        self.show_ghost = show;
        self
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for tests and scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn show_ghost(&self) -> bool {
        self.show_ghost
    }

    /// Seed of the random piece source, if it is random.
    pub fn seed(&self) -> Option<u32> {
        self.source.seed()
    }

    /// Piece operations are ignored while paused or after game over.
    fn frozen(&self) -> bool {
        self.paused || self.game_over
    }

    /// Shift the current piece horizontally by `dir` (-1 or +1).
    ///
    /// Reverts and returns false on collision.
    pub fn move_piece(&mut self, dir: i8) -> bool {
        if self.frozen() {
            return false;
        }
        self.current.x += dir;
        if self.board.collide(&self.current) {
            self.current.x -= dir;
            return false;
        }
        true
    }

    /// Step the current piece down one row.
    ///
    /// If the step collides, the piece is stepped back and locked. Returns
    /// true only if the piece actually moved.
    pub fn drop_piece(&mut self) -> bool {
        if self.frozen() {
            return false;
        }
        self.current.y += 1;
        if self.board.collide(&self.current) {
            self.current.y -= 1;
            self.lock_current();
            return false;
        }
        true
    }

    /// Drop the current piece to its landing row and lock it.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if self.frozen() {
            return None;
        }
        let start_y = self.current.y;
        while !self.board.collide(&self.current) {
            self.current.y += 1;
        }
        self.current.y -= 1;
        let distance = (self.current.y - start_y).max(0) as u32;
        self.lock_current();
        Some(distance)
    }

    /// Rotate the current piece 90° in place. No wall kicks.
    pub fn rotate_piece(&mut self, clockwise: bool) -> bool {
        if self.frozen() {
            return false;
        }
        let previous = self.current.shape;
        self.current.shape = previous.rotated(clockwise);
        if self.board.collide(&self.current) {
            self.current.shape = previous;
            return false;
        }
        true
    }

    /// Swap the current piece with the held one (once per lock cycle).
    ///
    /// With nothing held, the current piece is stored and the next piece is
    /// promoted instead.
    pub fn hold_piece(&mut self) -> bool {
        if self.frozen() || !self.can_hold {
            return false;
        }

        match self.held.take() {
            Some(mut held) => {
                held.reset_position();
                self.held = Some(std::mem::replace(&mut self.current, held));
            }
            None => {
                let next = self.promote_next();
                self.held = Some(std::mem::replace(&mut self.current, next));
            }
        }

        self.can_hold = false;
        self.check_spawn();
        true
    }

    /// Where the current piece would land. Never mutates the real piece.
    pub fn ghost_piece(&self) -> Piece {
        let mut ghost = self.current;
        while !self.board.collide(&ghost) {
            ghost.y += 1;
        }
        ghost.y -= 1;
        ghost
    }

    /// Flip between Running and Paused. Ignored after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        self.events.push(GameEvent::PauseChanged {
            paused: self.paused,
        });
        true
    }

    /// Pause because the host lost focus; never resumes.
    pub fn pause_for_focus_loss(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.toggle_pause()
    }

    /// Show or hide the ghost piece in snapshots.
    pub fn toggle_ghost(&mut self) {
        self.show_ghost = !self.show_ghost;
    }

    /// Re-initialize to Running with a fresh board and counters.
    ///
    /// The piece source keeps advancing, so a reset game gets new pieces.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = random_piece(&mut self.source);
        self.next = random_piece(&mut self.source);
        self.held = None;
        self.can_hold = true;
        self.score = 0;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.drop_counter_ms = 0;
        self.events.push(GameEvent::Reset);
        self.events.push(GameEvent::ScoreChanged { score: 0, lines: 0 });
    }

    /// Advance the automatic-fall clock by `delta_ms`.
    ///
    /// Once the accumulator exceeds the drop interval the piece steps down
    /// (locking if it cannot) and the accumulator restarts at zero.
    /// Returns true if a step happened.
    pub fn update(&mut self, delta_ms: u32) -> bool {
        if self.frozen() {
            return false;
        }
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(delta_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.drop_piece();
            self.drop_counter_ms = 0;
            return true;
        }
        false
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.drop_piece(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::RotateCw => self.rotate_piece(true),
            GameAction::RotateCcw => self.rotate_piece(false),
            GameAction::Hold => self.hold_piece(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.reset();
                true
            }
            GameAction::ToggleGhost => {
                self.toggle_ghost();
                true
            }
        }
    }

    /// Take all notifications recorded since the last call.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.current = self.current;
        out.ghost = self.show_ghost.then(|| self.ghost_piece());
        out.next = self.next;
        out.held = self.held;
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.lines = self.lines;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Merge, clear lines, re-arm hold and promote the next piece.
    fn lock_current(&mut self) {
        self.board.merge(&self.current);

        let cleared = self.board.clear_lines().len() as u32;
        self.events.push(GameEvent::Locked {
            lines_cleared: cleared,
        });
        if cleared > 0 {
            self.score += cleared * POINTS_PER_LINE;
            self.lines += cleared;
            self.events.push(GameEvent::ScoreChanged {
                score: self.score,
                lines: self.lines,
            });
        }

        self.can_hold = true;
        self.current = self.promote_next();
        self.check_spawn();
    }

    /// Take the next piece and draw a fresh one behind it.
    fn promote_next(&mut self) -> Piece {
        let fresh = random_piece(&mut self.source);
        std::mem::replace(&mut self.next, fresh)
    }

    /// Enter GameOver if the current piece collides where it stands.
    fn check_spawn(&mut self) {
        if self.board.collide(&self.current) {
            self.game_over = true;
            self.events.push(GameEvent::GameOver {
                final_score: self.score,
            });
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
