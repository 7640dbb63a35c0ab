//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, Color, FIELD_HEIGHT, FIELD_WIDTH};

/// Window background (medium-dark purple).
const BACKGROUND: Rgb = Rgb::new(0x33, 0x00, 0x88);
/// Playing field background (lavender).
const FIELD_BG: Rgb = Rgb::new(0x99, 0x66, 0xFF);
const WHITE: Rgb = Rgb::new(255, 255, 255);

const BORDER: Style = Style::new(WHITE, BACKGROUND).bold();
const EMPTY_CELL: Style = Style::new(Rgb::new(0x77, 0x44, 0xDD), FIELD_BG).dim();
const TITLE: Style = Style::new(WHITE, BACKGROUND).bold();
const LABEL: Style = Style::new(WHITE, BACKGROUND);
const HINT: Style = LABEL.dim();

/// Upper bound for `GameView` cell width and height.
pub const MAX_CELL_SIZE: u16 = 16;

/// Minimum free columns right of the field before the side panel is drawn.
const PANEL_MIN_WIDTH: u16 = 10;

const KEY_HINTS: [&str; 6] = ["←→↓ move", "↑ rotate", "SPC drop", "N new", "T test", "Q quit"];

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

/// Foreground color for a block color. Invalid is drawn magenta.
pub fn block_rgb(color: Color) -> Rgb {
    match color {
        Color::Invalid => Rgb::new(255, 0, 255),
        Color::Red => Rgb::new(255, 0, 0),
        Color::Green => Rgb::new(0, 110, 0),
        Color::Blue => Rgb::new(0, 0, 170),
    }
}

/// Draws the field centered in the viewport with a score panel to its right.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per field cell.
    cell_w: u16,
    /// Terminal rows per field cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Size of the bordered field in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (FIELD_WIDTH as u16) * self.cell_w + 2,
            (FIELD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Style::new(WHITE, BACKGROUND).glyph(' '));

        let (frame_w, frame_h) = self.frame_size();
        let x0 = viewport.width.saturating_sub(frame_w) / 2;
        let y0 = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, x0, y0, frame_w, frame_h);

        for row in 0..FIELD_HEIGHT {
            for col in 0..FIELD_WIDTH {
                let px = x0 + 1 + col as u16 * self.cell_w;
                let py = y0 + 1 + row as u16 * self.cell_h;
                // Unknown codes decode to the invalid marker.
                let (ch, style) = match snap.cell(row, col).unwrap_or_default() {
                    Cell::Filled(color) => ('█', Style::new(block_rgb(color), FIELD_BG).bold()),
                    Cell::Empty => ('·', EMPTY_CELL),
                };
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        let panel_x = x0.saturating_add(frame_w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) >= PANEL_MIN_WIDTH {
            draw_side_panel(fb, snap.score, panel_x, y0, viewport.height);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put_char(x, y, '┏', BORDER);
    fb.put_char(right, y, '┓', BORDER);
    fb.put_char(x, bottom, '┗', BORDER);
    fb.put_char(right, bottom, '┛', BORDER);

    for cx in x + 1..right {
        fb.put_char(cx, y, '━', BORDER);
        fb.put_char(cx, bottom, '━', BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '┃', BORDER);
        fb.put_char(right, cy, '┃', BORDER);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, score: u32, x: u16, y: u16, height: u16) {
    fb.put_str(x, y, "MINTRIS", TITLE);
    fb.put_str(x, y + 2, "SCORE", LABEL);
    fb.put_number(x, y + 3, score, TITLE);

    for (line, cy) in KEY_HINTS.iter().zip(y + 5..height) {
        fb.put_str(x, cy, line, HINT);
    }
}
