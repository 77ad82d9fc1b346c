//! Presentation hooks fed by game events.
//!
//! The game state records [`GameEvent`]s; the frame loop drains them into a
//! `Hud`. The side panel shows its score and line counters, and the view
//! also reads the game-over score, a short line-clear flash and the music
//! indicator from it.

use crate::types::GameEvent;

/// Frames a line-clear flash stays visible (about half a second at 60 FPS).
pub const FLASH_FRAMES: u16 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    score: u32,
    lines: u32,
    final_score: Option<u32>,
    flash: Option<(u32, u16)>,
    music_on: bool,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Locked { lines_cleared } if lines_cleared > 0 => {
                self.flash = Some((lines_cleared, FLASH_FRAMES));
            }
            GameEvent::Locked { .. } | GameEvent::PauseChanged { .. } => {}
            GameEvent::ScoreChanged { score, lines } => {
                self.score = score;
                self.lines = lines;
            }
            GameEvent::GameOver { final_score } => {
                self.final_score = Some(final_score);
            }
            GameEvent::Reset => {
                self.final_score = None;
                self.flash = None;
            }
        }
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.apply(&event);
        }
    }

    /// Advance per-frame timers.
    pub fn tick(&mut self) {
        if let Some((lines, frames)) = self.flash {
            self.flash = (frames > 1).then_some((lines, frames - 1));
        }
    }

    pub fn set_music(&mut self, on: bool) {
        self.music_on = on;
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Score reported by the last game over, until the next reset.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Lines removed by the most recent clear, while its flash is visible.
    pub fn flash_lines(&self) -> Option<u32> {
        self.flash.map(|(lines, _)| lines)
    }
}
