//! GameView: maps a `FrameSnapshot` and the menu into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{FrameSnapshot, Menu, MenuItem};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{EngineState, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

const BOARD_BG: Rgb = Rgb::BLACK;
const GRID_FG: Rgb = Rgb::new(110, 40, 110);
const MENU_BG: Rgb = Rgb::new(126, 59, 55);

/// Display color of a piece kind.
///
/// Black pieces would vanish on the black board, so they are drawn dark gray.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(255, 0, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(70, 70, 70),
        PieceKind::S => Rgb::MAGENTA,
        PieceKind::T => Rgb::new(0, 255, 255),
        PieceKind::Z => Rgb::new(0, 255, 0),
    }
}

/// Screen position of the board frame inside the viewport.
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
}

impl Default for GameView {
    fn default() -> Self {
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

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers keep one framebuffer across frames.
    pub fn render_into(
        &self,
        snap: &FrameSnapshot,
        menu: &Menu,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_h = BOARD_HEIGHT as u16 * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_w + 2) / 2,
            y: viewport.height.saturating_sub(board_h + 2) / 2,
            w: board_w + 2,
            h: board_h + 2,
        };

        self.draw_border(fb, frame, CellStyle::plain(Rgb::MAGENTA, Rgb::BLACK));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                match PieceKind::from_id(id) {
                    Some(kind) => self.draw_block(fb, frame, x as u16, y as u16, kind),
                    None => self.draw_empty(fb, frame, x as u16, y as u16),
                }
            }
        }

        // Cells above the top row are not drawn.
        if let Some(active) = snap.active {
            for &(x, y) in active.cells.iter() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_block(fb, frame, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.state == EngineState::Menu {
            self.draw_menu(fb, menu, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &FrameSnapshot, menu: &Menu, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, menu, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;

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

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        self.fill_cell(fb, frame, x, y, '·', CellStyle::plain(GRID_FG, BOARD_BG));
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(piece_color(kind), BOARD_BG)
        };
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &FrameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let mut y = frame.y;
        for (name, text) in [
            ("STATE", snap.state.as_str().to_uppercase()),
            ("SPEED", format!("{}", snap.speed)),
            ("BLOCKS", snap.occupied_count().to_string()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &text, value);
            y = y.saturating_add(3);
        }

        let hint = CellStyle::plain(Rgb::new(140, 140, 140), Rgb::BLACK);
        for line in ["arrows/hjkl move", "space/up rotate", "esc menu  q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, menu: &Menu, frame: Frame) {
        let x = frame.x + 2;
        let y = frame.y + 2;
        let w = frame.w.saturating_sub(4);
        let h = frame.h.saturating_sub(4);
        fb.fill_rect(x, y, w, h, ' ', CellStyle::plain(Rgb::WHITE, MENU_BG));

        let text_x = x + 1;
        fb.put_str(text_x, y + 1, menu.title(), menu_style(false));

        for (i, item) in menu.items().iter().enumerate() {
            let row = y + 3 + 2 * i as u16;
            let end = fb.put_str(text_x, row, item.name(), menu_style(i == menu.selection()));

            if let MenuItem::Multiple(choice) = item {
                let mut cx = end + 1;
                for (j, option) in choice.choices.iter().enumerate() {
                    cx = fb.put_str(cx, row, option, menu_style(j == choice.selection)) + 1;
                }
            }
        }
    }
}

/// Selected entries are white, bold and underlined; the rest magenta.
fn menu_style(selected: bool) -> CellStyle {
    if selected {
        CellStyle {
            fg: Rgb::WHITE,
            bg: MENU_BG,
            bold: true,
            underline: true,
        }
    } else {
        CellStyle::plain(Rgb::MAGENTA, MENU_BG)
    }
}
