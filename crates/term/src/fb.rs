//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
///
/// `ch == '\0'` marks the continuation column of a double-width glyph; the
/// renderer emits nothing for it because the preceding glyph already covers
/// the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub fn is_wide_continuation(&self) -> bool {
        self.ch == '\0'
    }
}

/// Display width of a character in terminal columns.
///
/// Covers the CJK blocks the built-in vocabulary draws from; everything else
/// is treated as a single column.
pub fn char_width(ch: char) -> u16 {
    let c = ch as u32;
    let wide = (0x1100..=0x115F).contains(&c)
        || (0x2E80..=0xA4CF).contains(&c)
        || (0xAC00..=0xD7A3).contains(&c)
        || (0xF900..=0xFAFF).contains(&c)
        || (0xFE30..=0xFE4F).contains(&c)
        || (0xFF00..=0xFF60).contains(&c)
        || (0xFFE0..=0xFFE6).contains(&c);
    if wide {
        2
    } else {
        1
    }
}

/// Display width of a string in terminal columns.
pub fn str_width(s: &str) -> u16 {
    s.chars().map(char_width).sum()
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, preserving the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Put a string, accounting for double-width glyphs.
    ///
    /// Wide characters occupy two cells: the glyph itself followed by a
    /// continuation marker.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            let w = char_width(ch);
            if cx >= self.width || cx + w > self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            if w == 2 {
                self.put_char(cx + 1, y, '\0', style);
            }
            cx += w;
        }
    }

    /// Put a string centered within `[x, x + w)`.
    pub fn put_str_centered(&mut self, x: u16, y: u16, w: u16, s: &str, style: CellStyle) {
        let text_w = str_width(s);
        let offset = w.saturating_sub(text_w) / 2;
        self.put_str(x.saturating_add(offset), y, s, style);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Draw a single-line box border on the rectangle `[x, x+w) x [y, y+h)`.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        self.put_char(x, y, '┌', style);
        self.put_char(x + w - 1, y, '┐', style);
        self.put_char(x, y + h - 1, '└', style);
        self.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            self.put_char(x + dx, y, '─', style);
            self.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y + dy, '│', style);
            self.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_char(10, 10, 'X', CellStyle::default());
        assert!(fb.get(10, 10).is_none());
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abcdef", CellStyle::default());
        assert_eq!(fb.get(2, 0).unwrap().ch, 'a');
        assert_eq!(fb.get(3, 0).unwrap().ch, 'b');
    }

    #[test]
    fn put_str_centered_balances_margins() {
        let mut fb = FrameBuffer::new(10, 1);
        fb.put_str_centered(0, 0, 10, "abcd", CellStyle::default());
        assert_eq!(fb.get(3, 0).unwrap().ch, 'a');
        assert_eq!(fb.get(6, 0).unwrap().ch, 'd');
    }

    #[test]
    fn draw_box_places_corners() {
        let mut fb = FrameBuffer::new(6, 4);
        fb.draw_box(1, 0, 4, 3, CellStyle::default());
        assert_eq!(fb.get(1, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(4, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(1, 2).unwrap().ch, '└');
        assert_eq!(fb.get(4, 2).unwrap().ch, '┘');
    }

    #[test]
    fn wide_glyphs_take_two_cells() {
        let mut fb = FrameBuffer::new(8, 1);
        fb.put_str(0, 0, "a苹b", CellStyle::default());
        assert_eq!(fb.get(0, 0).unwrap().ch, 'a');
        assert_eq!(fb.get(1, 0).unwrap().ch, '苹');
        assert!(fb.get(2, 0).unwrap().is_wide_continuation());
        assert_eq!(fb.get(3, 0).unwrap().ch, 'b');
    }

    #[test]
    fn wide_glyph_does_not_straddle_right_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(2, 0, "苹", CellStyle::default());
        assert_eq!(fb.get(2, 0).unwrap().ch, ' ', "no room for both columns");
    }

    #[test]
    fn str_width_counts_cjk_as_double() {
        assert_eq!(str_width("cat"), 3);
        assert_eq!(str_width("苹果"), 4);
        assert_eq!(str_width("a猫"), 3);
    }

    #[test]
    fn resize_is_lazy_for_same_dimensions() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.put_char(1, 1, 'Z', CellStyle::default());
        fb.resize(3, 3);
        assert_eq!(fb.get(1, 1).unwrap().ch, 'Z');
    }
}
