//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
const LABEL: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: SCREEN_BG,
    bold: true,
    dim: false,
};
const VALUE: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
const HINT: CellStyle = CellStyle {
    fg: Rgb::new(150, 150, 150),
    bg: SCREEN_BG,
    bold: false,
    dim: true,
};
const BANNER: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 255),
    bg: SCREEN_BG,
    bold: true,
    dim: false,
};

const CONTROLS: [&str; 6] = [
    "Left/Right  move",
    "Down        soft drop",
    "Up          rotate",
    "Space       hard drop",
    "R           restart",
    "Esc/Q       quit",
];

/// Draws the playfield, side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a cell with common terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Frame origin and size, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render a session into an existing framebuffer.
    ///
    /// Reuses the buffer across frames; it is only resized when the viewport
    /// changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(viewport);
        self.draw_border(fb, frame);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => ('█', block_style(*color)),
                    None => (
                        '·',
                        CellStyle {
                            fg: Rgb::new(90, 90, 100),
                            bg: PLAYFIELD_BG,
                            bold: false,
                            dim: true,
                        },
                    ),
                };
                self.fill_board_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_centered(fb, frame, 0, "GAME OVER", BANNER);
            self.draw_centered(fb, frame, 2, "R restart", HINT);
            self.draw_centered(fb, frame, 3, "Q quit", HINT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render the title screen: name, prompt and controls.
    pub fn render_title_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(viewport);
        self.draw_border(fb, frame);
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            CellStyle::plain(VALUE.fg, PLAYFIELD_BG),
        );

        self.draw_centered(fb, frame, -6, "BLOCKFALL", BANNER);
        self.draw_centered(fb, frame, -3, "Press ENTER to play", LABEL);

        let help_w = CONTROLS.iter().map(|s| s.chars().count()).max().unwrap_or(0) as u16;
        let help_x = frame.x + frame.w.saturating_sub(help_w) / 2;
        let mut y = frame.y + frame.h / 2;
        for line in CONTROLS {
            fb.put_str(help_x, y, line, HINT);
            y = y.saturating_add(1);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        if f.w < 2 || f.h < 2 {
            return;
        }

        fb.put_char(f.x, f.y, '┌', BORDER);
        fb.put_char(f.x + f.w - 1, f.y, '┐', BORDER);
        fb.put_char(f.x, f.y + f.h - 1, '└', BORDER);
        fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', BORDER);

        for dx in 1..f.w - 1 {
            fb.put_char(f.x + dx, f.y, '─', BORDER);
            fb.put_char(f.x + dx, f.y + f.h - 1, '─', BORDER);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y + dy, '│', BORDER);
            fb.put_char(f.x + f.w - 1, f.y + dy, '│', BORDER);
        }
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = f.x + 1 + cell_x * self.cell_w;
        let py = f.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = f.y;
        for (label, value) in [("SCORE", snap.score), ("LINES", snap.lines), ("LEVEL", snap.level)] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", LABEL);
        self.draw_preview(fb, panel_x, y.saturating_add(1), snap.next);
    }

    /// Next piece in its spawn orientation, inside a 4x4-cell box.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape = get_shape(kind, Rotation::North);
        let min_x = shape.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
        let min_y = shape.iter().map(|&(_, dy)| dy).min().unwrap_or(0);
        let style = block_style(kind.color());
        for &(dx, dy) in shape.iter() {
            let px = x + ((dx - min_x) as u16) * self.cell_w;
            let py = y + ((dy - min_y) as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    /// Centered text on the frame's middle row, shifted by `row_offset`.
    fn draw_centered(&self, fb: &mut FrameBuffer, f: Frame, row_offset: i16, text: &str, style: CellStyle) {
        let mid = (f.y + f.h / 2) as i16 + row_offset;
        if mid < 0 {
            return;
        }
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid as u16, text, style);
    }
}

fn block_style(color: Rgb) -> CellStyle {
    CellStyle {
        fg: color,
        bg: PLAYFIELD_BG,
        bold: true,
        dim: false,
    }
}
