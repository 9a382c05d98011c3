//! GameView: maps a core `RenderBatch` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{RenderBatch, Renderable};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::sprites::SpriteSheet;
use crate::types::{GridConfig, Position};

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

/// Top-left terminal cell of the maze area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub x: u16,
    pub y: u16,
}

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const STATUS: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));

/// Draws one block-sized rectangle per renderable, in batch order.
pub struct GameView {
    /// Block width in terminal columns.
    cell_w: u16,
    /// Block height in terminal rows.
    cell_h: u16,
    grid: GridConfig,
    sprites: SpriteSheet,
}

impl GameView {
    /// 2x1 helps compensate for typical terminal glyph aspect ratio.
    pub fn new(grid: GridConfig, sprites: SpriteSheet) -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
            grid,
            sprites,
        }
    }

    /// Maze size in terminal cells.
    pub fn board_size(&self) -> (u16, u16) {
        (
            (self.grid.cols().max(0) as u16) * self.cell_w,
            (self.grid.rows().max(0) as u16) * self.cell_h,
        )
    }

    /// Where the maze lands when centered in `viewport` (status line below it).
    pub fn origin(&self, viewport: Viewport) -> Origin {
        let (w, h) = self.board_size();
        Origin {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h + 1) / 2,
        }
    }

    /// Grid cell nearest to a pixel position, `None` if it falls off the grid.
    ///
    /// Enemies between blocks are shown in whichever block they mostly cover.
    pub fn nearest_cell(&self, pos: Position) -> Option<(u16, u16)> {
        let half = self.grid.block() / 2;
        let snapped = Position::new(pos.x + half, pos.y + half);
        self.grid
            .cell_of(snapped)
            .map(|(col, row)| (col as u16, row as u16))
    }

    /// Render the batch into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, batch: &RenderBatch, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::fg(BACKGROUND),
        });

        let origin = self.origin(viewport);
        for item in batch.iter() {
            self.draw_rect(fb, origin, item);
        }

        self.draw_status(fb, batch, origin);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, batch: &RenderBatch, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(batch, viewport, &mut fb);
        fb
    }

    /// Fill the block under `item` with its kind's sprite.
    pub fn draw_rect(&self, fb: &mut FrameBuffer, origin: Origin, item: &Renderable) {
        let Some((col, row)) = self.nearest_cell(item.pos) else {
            return;
        };
        let sprite = self.sprites.get(item.kind);
        let style = CellStyle {
            fg: sprite.fg,
            bg: BACKGROUND,
            bold: true,
        };

        let px = origin.x.saturating_add(col * self.cell_w);
        let py = origin.y.saturating_add(row * self.cell_h);
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let ch = sprite.glyph[(dx as usize) % sprite.glyph.len()];
                fb.put_char(px.saturating_add(dx), py.saturating_add(dy), ch, style);
            }
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, batch: &RenderBatch, origin: Origin) {
        let (_, h) = self.board_size();
        let y = origin.y.saturating_add(h);
        if y >= fb.height() {
            return;
        }
        let text = format!(
            "DOTS {}  POWER {}  q:quit",
            batch.dots_left, batch.powerups_left
        );
        fb.put_str(origin.x, y, &text, STATUS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::DEFAULT_SHEET;
    use crate::types::{EntityKind, BLOCK_SIZE};

    fn view(cols: i32, rows: i32) -> GameView {
        GameView::new(
            GridConfig::with_grid(cols, rows, BLOCK_SIZE),
            SpriteSheet::load(DEFAULT_SHEET).unwrap(),
        )
    }

    #[test]
    fn nearest_cell_rounds_half_blocks() {
        let v = view(4, 4);
        assert_eq!(v.nearest_cell(Position::new(0, 0)), Some((0, 0)));
        assert_eq!(v.nearest_cell(Position::new(15, 0)), Some((0, 0)));
        assert_eq!(v.nearest_cell(Position::new(16, 0)), Some((1, 0)));
        assert_eq!(v.nearest_cell(Position::new(32, 47)), Some((1, 1)));
        assert_eq!(v.nearest_cell(Position::new(-17, 0)), None);
        assert_eq!(v.nearest_cell(Position::new(4 * 32, 0)), None);
    }

    #[test]
    fn draws_two_columns_per_block() {
        let v = view(2, 1);
        let mut batch = RenderBatch::default();
        batch.push(EntityKind::Wall, Position::new(32, 0));
        let fb = v.render(&batch, Viewport::new(4, 2));
        assert_eq!(fb.row_text(0), "  ██");
    }

    #[test]
    fn later_items_draw_over_earlier_ones() {
        let v = view(1, 1);
        let mut batch = RenderBatch::default();
        batch.push(EntityKind::Dot, Position::new(0, 0));
        batch.push(EntityKind::Enemy, Position::new(0, 0));
        let fb = v.render(&batch, Viewport::new(2, 1));
        assert_eq!(fb.row_text(0), "/\\");
    }
}
