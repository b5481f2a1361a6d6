//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::shapes::spawn_offsets;
use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind, GHOST_COLOR};

const BLOCK: char = '█';
const GHOST: char = '░';
const EMPTY: char = '·';

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Lays out the well, the side panel and the overlays.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = to_u16(snap.width).saturating_mul(self.cell_w);
        let board_px_h = to_u16(snap.height).saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(start_x.saturating_add(1), start_y.saturating_add(1), board_px_w, board_px_h, ' ', CellStyle::new(WELL_BG, WELL_BG));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Locked cells.
        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                match snap.cell(x, y) {
                    Cell::Occupied(kind) => self.draw_block(fb, start_x, start_y, x, y, kind),
                    Cell::Empty => {
                        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
                        self.fill_cell_rect(fb, start_x, start_y, x, y, EMPTY, style);
                    }
                }
            }
        }

        if !snap.game_over {
            self.draw_ghost(fb, start_x, start_y, snap);
            for &(x, y) in snap.current.cells.iter() {
                if in_well(snap, x, y) {
                    self.draw_block(fb, start_x, start_y, x, y, snap.current.kind);
                }
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &["GAME OVER", "r: restart"]);
        } else if snap.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    /// Ghost cells the current piece does not already cover.
    fn draw_ghost(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, snap: &GameSnapshot) {
        let ghost: &PieceSnapshot = &snap.ghost;
        let fg = Rgb::from_hex(GHOST_COLOR).unwrap_or(Rgb::new(51, 51, 51));
        let style = CellStyle::new(fg, WELL_BG);
        for &(x, y) in ghost.cells.iter() {
            if in_well(snap, x, y) && !snap.current.covers(x, y) {
                self.fill_cell_rect(fb, start_x, start_y, x, y, GHOST, style);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i32, y: i32, kind: PieceKind) {
        let style = CellStyle::new(kind_rgb(kind), WELL_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, BLOCK, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i32,
        cell_y: i32,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(to_u16(cell_x.max(0) as usize).saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(to_u16(cell_y.max(0) as usize).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, panel_x: u16, start_y: u16) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, number) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, Some(snap.next), false);
        y = y.saturating_add(6);

        fb.put_str(panel_x, y, "HOLD", label);
        self.draw_preview(fb, panel_x, y + 1, snap.held, !snap.can_hold);
        y = y.saturating_add(6);

        let hint = CellStyle::new(Rgb::new(140, 140, 140), PANEL_BG).dim();
        for line in ["←→↓ move  ↑ rotate", "space drop  c hold", "p pause  q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Draw a kind in its spawn orientation inside a 4x4 box.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: Option<PieceKind>, dimmed: bool) {
        let Some(kind) = kind else {
            fb.put_str(x, y, "-", CellStyle::default());
            return;
        };
        let mut style = CellStyle::new(kind_rgb(kind), PANEL_BG);
        if dimmed {
            style = style.dim();
        }
        for (dx, dy) in spawn_offsets(kind) {
            let px = x.saturating_add(to_u16(dx.max(0) as usize).saturating_mul(self.cell_w));
            let py = y.saturating_add(to_u16(dy.max(0) as usize));
            fb.fill_rect(px, py, self.cell_w, 1, BLOCK, style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mut y = start_y.saturating_add(frame_h / 2);
        for text in lines {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, y, text, style);
            y = y.saturating_add(1);
        }
    }
}

/// Terminal coordinates are `u16`; anything larger pins to the far edge.
fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn in_well(snap: &GameSnapshot, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as usize) < snap.width && (y as usize) < snap.height
}

fn kind_rgb(kind: PieceKind) -> Rgb {
    Rgb::from_hex(kind.color()).unwrap_or(Rgb::new(220, 220, 220))
}
