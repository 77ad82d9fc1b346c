//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{hold_offset, GameSnapshot, Piece, NEXT_OFFSET};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::hud::Hud;
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH, POINTS_PER_LINE};

/// Preview boxes are four cells square.
const PREVIEW_CELLS: u16 = 4;

/// Narrowest side panel worth drawing.
const MIN_PANEL_W: u16 = 10;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const HELP: &str = "←→ move  ↓ drop  ↑/X/Z rotate  SPACE hard  C hold  G ghost  P pause  R reset  M music  Q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board frame placement for one render pass.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares cells in common terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, None, viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: Option<&Hud>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame = {
            let w = board_w + 2;
            let h = board_h + 2;
            Frame {
                x: viewport.width.saturating_sub(w) / 2,
                y: match self.anchor_y {
                    AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                    AnchorY::Top => 0,
                },
                w,
                h,
            }
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            board_w,
            board_h,
            ' ',
            CellStyle::plain(Rgb::new(80, 80, 90), BOARD_BG),
        );
        draw_border(fb, frame, CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (px, py) = self.cell_origin(frame, x as u16, y as u16);
                match cell {
                    Some(color) => self.draw_block(fb, px, py, *color, false),
                    None => self.draw_empty(fb, px, py),
                }
            }
        }

        if let Some(ghost) = &snap.ghost {
            let style = CellStyle {
                fg: ghost.color.into(),
                bg: BOARD_BG,
                bold: false,
                dim: true,
            };
            for (x, y) in visible_cells(ghost) {
                let (px, py) = self.cell_origin(frame, x, y);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '░', style);
            }
        }

        for (x, y) in visible_cells(&snap.current) {
            let (px, py) = self.cell_origin(frame, x, y);
            self.draw_block(fb, px, py, snap.current.color, true);
        }

        self.draw_side_panel(fb, snap, hud, viewport, frame);

        if snap.game_over {
            let score = hud.and_then(Hud::final_score).unwrap_or(snap.score);
            self.draw_game_over(fb, frame, score);
        } else if snap.paused {
            draw_overlay_line(fb, frame, 0, "PAUSED");
            draw_overlay_line(fb, frame, 2, "P to resume");
        }

        let help_y = frame.y + frame.h;
        if help_y < viewport.height {
            let dim = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str(frame.x, help_y, HELP, dim);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_hud(snap, None, viewport)
    }

    pub fn render_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: Option<&Hud>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, frame: Frame, x: u16, y: u16) -> (u16, u16) {
        (
            frame.x + 1 + x * self.cell_w,
            frame.y + 1 + y * self.cell_h,
        )
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        fb.put_char(px, py, '·', style);
    }

    /// Solid block with a lit left face and a shadowed right face.
    fn draw_block(&self, fb: &mut FrameBuffer, px: u16, py: u16, color: Color, bold: bool) {
        for dx in 0..self.cell_w {
            let face = match dx {
                _ if self.cell_w == 1 => color,
                0 => color.shade(20),
                d if d + 1 == self.cell_w => color.shade(-20),
                _ => color,
            };
            let style = CellStyle {
                fg: face.into(),
                bg: BOARD_BG,
                bold,
                dim: false,
            };
            for dy in 0..self.cell_h {
                fb.put_char(px + dx, py + dy, '█', style);
            }
        }
    }

    /// Mini preview box with the piece centred by `offset` (in cells).
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        piece: Option<&Piece>,
        offset: (f32, f32),
        dimmed: bool,
    ) {
        let box_w = PREVIEW_CELLS * self.cell_w;
        let box_h = PREVIEW_CELLS * self.cell_h;
        fb.fill_rect(x, y, box_w, box_h, ' ', CellStyle::plain(BOARD_BG, BOARD_BG));

        let Some(piece) = piece else {
            return;
        };
        let color = if dimmed {
            piece.color.shade(-50)
        } else {
            piece.color
        };
        for (dx, dy) in piece.shape.cells() {
            let cx = ((offset.0 + dx as f32) * self.cell_w as f32).round() as i32;
            let cy = ((offset.1 + dy as f32) * self.cell_h as f32).floor() as i32;
            if cx < 0 || cy < 0 || cx as u16 >= box_w || cy as u16 >= box_h {
                continue;
            }
            self.draw_block(fb, x + cx as u16, y + cy as u16, color, false);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: Option<&Hud>,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let preview_h = PREVIEW_CELLS * self.cell_h;
        // Counters come from score events when a HUD is attached.
        let (score, lines) = hud.map_or((snap.score, snap.lines), |h| (h.score(), h.lines()));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        let end = fb.put_u32(panel_x, y, score, value);
        if let Some(cleared) = hud.and_then(Hud::flash_lines) {
            let flash = CellStyle {
                fg: Rgb::new(255, 220, 80),
                bold: true,
                ..value
            };
            let x = fb.put_str(end + 1, y, "+", flash);
            fb.put_u32(x, y, cleared * POINTS_PER_LINE, flash);
        }
        y += 2;

        fb.put_str(panel_x, y, "LINES", label);
        y += 1;
        fb.put_u32(panel_x, y, lines, value);
        y += 2;

        fb.put_str(panel_x, y, "HOLD", label);
        y += 1;
        let held = snap.held.as_ref();
        let offset = held.map_or((1.0, 1.0), |p| hold_offset(p.kind));
        self.draw_preview(fb, panel_x, y, held, offset, !snap.can_hold);
        y += preview_h + 1;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        self.draw_preview(fb, panel_x, y, Some(&snap.next), NEXT_OFFSET, false);
        y += preview_h + 1;

        let on_off = |on: bool| if on { "ON" } else { "OFF" };
        let x = fb.put_str(panel_x, y, "GHOST ", label);
        fb.put_str(x, y, on_off(snap.ghost.is_some()), value);
        if let Some(hud) = hud {
            y += 1;
            let x = fb.put_str(panel_x, y, "MUSIC ", label);
            fb.put_str(x, y, on_off(hud.music_on()), value);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame: Frame, score: u32) {
        draw_overlay_line(fb, frame, -1, "GAME OVER");

        let style = overlay_style();
        let text = "SCORE ";
        let digits = count_digits(score);
        let w = text.len() as u16 + digits;
        let x = frame.x.saturating_add(frame.w.saturating_sub(w) / 2);
        let y = frame.y + frame.h / 2 + 1;
        let x = fb.put_str(x, y, text, style);
        fb.put_u32(x, y, score, style);

        draw_overlay_line(fb, frame, 3, "R to restart");
    }
}

/// On-board cells of `piece`; rows above the top edge are not drawn.
fn visible_cells(piece: &Piece) -> impl Iterator<Item = (u16, u16)> + '_ {
    piece.cells().filter_map(|(x, y)| {
        (x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8)
            .then_some((x as u16, y as u16))
    })
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn overlay_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: PANEL_BG,
        bold: true,
        dim: false,
    }
}

/// Centre `text` horizontally, `dy` rows from the frame's middle.
fn draw_overlay_line(fb: &mut FrameBuffer, frame: Frame, dy: i16, text: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2);
    let y = mid_y.saturating_add_signed(dy);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, overlay_style());
}

fn count_digits(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
