//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It is the only consumer of the core's grid
//! and piece queries, and it can be unit-tested against a framebuffer.

use crate::core::shapes::occupied_cells;
use crate::core::{FallingPiece, GameState};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Maps a block color onto its terminal RGB value.
pub fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Green => Rgb::new(90, 200, 90),
        BlockColor::Orange => Rgb::new(255, 165, 0),
        BlockColor::Red => Rgb::new(220, 80, 80),
        BlockColor::Blue => Rgb::new(90, 130, 230),
        BlockColor::Purple => Rgb::new(190, 110, 220),
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const BOARD_BG: Rgb = Rgb::new(28, 28, 36);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Board on the left third, panel to its right.
        let start_x = 2u16;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells; empty cells get a dim dot.
        for row in 0..BOARD_HEIGHT as i8 {
            for col in 0..BOARD_WIDTH as i8 {
                match state.board().get(col, row).unwrap_or(None) {
                    Some(color) => {
                        self.draw_board_cell(&mut fb, start_x, start_y, col as u16, row as u16, color)
                    }
                    None => self.draw_empty_cell(&mut fb, start_x, start_y, col as u16, row as u16),
                }
            }
        }

        if !state.started() {
            self.draw_start_screen(&mut fb, start_x + frame_w + 4, start_y + frame_h / 2 - 2);
        } else {
            self.draw_active_piece(&mut fb, state, start_x, start_y);
            self.draw_side_panel(&mut fb, state, viewport, start_x + frame_w + 4, start_y);
            if state.game_over() {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            }
        }

        fb
    }

    fn draw_active_piece(&self, fb: &mut FrameBuffer, state: &GameState, start_x: u16, start_y: u16) {
        let piece = state.active();
        for (dc, dr) in occupied_cells(piece.active_grid()) {
            let col = piece.col + dc;
            let row = piece.row + dr;
            // Cells above the grid are simply not drawn.
            if col >= 0 && col < BOARD_WIDTH as i8 && row >= 0 && row < BOARD_HEIGHT as i8 {
                self.draw_board_cell(fb, start_x, start_y, col as u16, row as u16, piece.color);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, col: u16, row: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
        self.fill_cell_rect(fb, start_x, start_y, col, row, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        color: BlockColor,
    ) {
        let style = CellStyle::new(block_rgb(color), BOARD_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, col, row, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw a shape preview (base rotation) with its top-left at (x, y).
    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &FallingPiece, x: u16, y: u16) {
        let style = CellStyle::new(block_rgb(piece.color), Rgb::new(0, 0, 0)).bold();
        for (dc, dr) in occupied_cells(piece.preview_grid()) {
            let px = x + (dc as u16) * self.cell_w;
            let py = y + (dr as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y + 1;
        fb.put_str(panel_x, y, &format!("Current: {}", state.score()), label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("Cleared: {}", state.lines()), label);
        y = y.saturating_add(2);
        fb.put_str(panel_x, y, &format!("Best score: {}", state.best().score), value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("Best lines: {}", state.best().lines), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "Current:", label);
        self.draw_preview(fb, state.active(), panel_x, y + 1);

        let next_x = panel_x + 6 * self.cell_w;
        fb.put_str(next_x, y, "Next:", label);
        self.draw_preview(fb, state.next_piece(), next_x, y + 1);
    }

    fn draw_start_screen(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        // One letter per palette color, cycling through the block palette.
        let title = "BLOCKFALL";
        let palette = BlockColor::PALETTE;
        for (i, ch) in title.chars().enumerate() {
            let color = palette[i % palette.len()];
            let style = CellStyle::new(block_rgb(color), Rgb::new(0, 0, 0)).bold();
            fb.put_char(x + i as u16, y, ch, style);
        }
        fb.put_str(x, y + 2, "space to start", CellStyle::default());
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
