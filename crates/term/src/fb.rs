//! Character framebuffer the game view is composed in.
//!
//! The 3D view arrives as pixels and is packed two rows per cell with
//! [`HALF_BLOCK`]; the frame and the status panel are plain text cells.

use crate::types::Rgb;

/// Upper half block: foreground paints the top pixel, background the bottom.
pub const HALF_BLOCK: char = '▀';

/// Box-drawing set for [`FrameBuffer::draw_frame`]:
/// corners clockwise from top-left, then horizontal and vertical edges.
const FRAME: [char; 6] = ['┌', '┐', '┘', '└', '─', '│'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Faded text, e.g. older log lines
    pub fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::BLACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// Two stacked pixels in one cell
    pub fn half_block(top: Rgb, bottom: Rgb) -> Self {
        Self::new(HALF_BLOCK, CellStyle::new(top, bottom))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// Grid of styled cells, row-major.
///
/// Every write outside the grid is silently dropped, so the layout code can
/// place text and frames without clipping them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the grid size. Cell contents are unspecified afterwards;
    /// callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|at| self.cells[at])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(at) = self.offset(x, y) {
            self.cells[at] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell::new(ch, style));
    }

    /// Write `s` left to right; returns the column after the last char.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        self.put_str_clipped(x, y, s, u16::MAX, style)
    }

    /// Like [`put_str`](Self::put_str), but at most `max` columns wide.
    pub fn put_str_clipped(&mut self, x: u16, y: u16, s: &str, max: u16, style: CellStyle) -> u16 {
        let room = self.width.saturating_sub(x).min(max);
        let mut end = x;
        for ch in s.chars().take(usize::from(room)) {
            self.put_char(end, y, ch, style);
            end += 1;
        }
        end
    }

    /// Single-line box with its top-left corner at (`x`, `y`).
    ///
    /// Boxes narrower or shorter than two cells are not drawn.
    pub fn draw_frame(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let [tl, tr, br, bl, horizontal, vertical] = FRAME;
        let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));

        for cx in x.saturating_add(1)..right {
            self.put_char(cx, y, horizontal, style);
            self.put_char(cx, bottom, horizontal, style);
        }
        for cy in y.saturating_add(1)..bottom {
            self.put_char(x, cy, vertical, style);
            self.put_char(right, cy, vertical, style);
        }
        self.put_char(x, y, tl, style);
        self.put_char(right, y, tr, style);
        self.put_char(right, bottom, br, style);
        self.put_char(x, bottom, bl, style);
    }

    /// Pack a `cols` × `2 * rows` pixel image into half-block cells starting
    /// at (`x`, `y`). `pixel(px, py)` is asked for every pixel once.
    pub fn blit_half_blocks(
        &mut self,
        x: u16,
        y: u16,
        cols: u16,
        rows: u16,
        mut pixel: impl FnMut(u32, u32) -> Rgb,
    ) {
        for row in 0..rows {
            let py = u32::from(row) * 2;
            for col in 0..cols {
                let px = u32::from(col);
                let cell = Cell::half_block(pixel(px, py), pixel(px, py + 1));
                self.set(x.saturating_add(col), y.saturating_add(row), cell);
            }
        }
    }

    /// Row `y` as plain text, for tests and debug dumps.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
