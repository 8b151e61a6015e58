//! Canvas: owned 2D character grid for one render call.

use super::charset::{Arms, BoxChars, CharSet};
use crate::text_width::char_width;

// ─── Rect ────────────────────────────────────────────────────────────────────

/// A rectangle in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

// ─── Canvas ──────────────────────────────────────────────────────────────────

/// One grid column.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cell {
    /// A glyph, followed by any zero-width marks written after it.
    Glyph(char, String),
    /// Right half of the double-width glyph one column to the left.
    WideTail,
}

impl Cell {
    const BLANK: Cell = Cell::Glyph(' ', String::new());
}

/// A 2D character grid used as a painting surface.
///
/// Coordinates are signed; writes outside the grid are dropped. A
/// double-width glyph occupies its column and the next one.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub charset: CharSet,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            width,
            height,
            charset,
            cells: vec![vec![Cell::BLANK; width]; height],
        }
    }

    fn index(&self, col: i64, row: i64) -> Option<(usize, usize)> {
        let (col, row) = (usize::try_from(col).ok()?, usize::try_from(row).ok()?);
        (col < self.width && row < self.height).then_some((col, row))
    }

    /// The glyph in a cell. The right half of a wide glyph reads as blank.
    pub fn get(&self, col: i64, row: i64) -> char {
        match self.index(col, row).map(|(c, r)| &self.cells[r][c]) {
            Some(Cell::Glyph(ch, _)) => *ch,
            _ => ' ',
        }
    }

    /// Overwrite one column, blanking the other half of any wide glyph it splits.
    pub fn set(&mut self, col: i64, row: i64, ch: char) {
        let Some((c, r)) = self.index(col, row) else {
            return;
        };
        let line = &mut self.cells[r];
        if line[c] == Cell::WideTail && c > 0 {
            line[c - 1] = Cell::BLANK;
        }
        if line.get(c + 1) == Some(&Cell::WideTail) {
            line[c + 1] = Cell::BLANK;
        }
        line[c] = Cell::Glyph(ch, String::new());
    }

    /// Add line arms to a cell, merging with whatever line glyph is already there.
    ///
    /// Arrowheads are kept; any other non-line glyph is replaced.
    pub fn merge_arms(&mut self, col: i64, row: i64, arms: Arms) {
        let existing = self.get(col, row);
        let bc = BoxChars::for_charset(self.charset);
        if bc.is_arrow(existing) {
            return;
        }
        let merged = match Arms::from_char(existing) {
            Some(current) => current.merge(arms),
            None => arms,
        };
        self.set(col, row, merged.to_char(self.charset));
    }

    /// Draw a box outline, overwriting whatever is underneath.
    pub fn draw_box(&mut self, rect: Rect, bc: &BoxChars) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        for col in x0..=x1 {
            self.set(col, y0, bc.horizontal);
            self.set(col, y1, bc.horizontal);
        }
        for row in y0..=y1 {
            self.set(x0, row, bc.vertical);
            self.set(x1, row, bc.vertical);
            if row != y0 && row != y1 {
                for col in (x0 + 1)..x1 {
                    self.set(col, row, ' ');
                }
            }
        }
        self.set(x0, y0, bc.top_left);
        self.set(x1, y0, bc.top_right);
        self.set(x0, y1, bc.bottom_left);
        self.set(x1, y1, bc.bottom_right);
    }

    /// Write a string starting at (col, row), clipped to the grid.
    ///
    /// Columns advance by display width: wide glyphs take two, zero-width
    /// marks attach to the glyph before them. A wide glyph that would
    /// straddle the right edge is dropped.
    pub fn write_str(&mut self, col: i64, row: i64, s: &str) {
        let mut x = col;
        for ch in s.chars() {
            let width = char_width(ch) as i64;
            match width {
                0 => self.attach_mark(x - 1, row, ch),
                1 => self.set(x, row, ch),
                _ => {
                    let tail = x + width - 1;
                    if let (Some(_), Some((c, r))) = (self.index(x, row), self.index(tail, row)) {
                        self.set(tail, row, ' ');
                        self.set(x, row, ch);
                        self.cells[r][c] = Cell::WideTail;
                    }
                }
            }
            x += width;
        }
    }

    fn attach_mark(&mut self, col: i64, row: i64, mark: char) {
        if mark.is_control() {
            return;
        }
        let Some((mut c, r)) = self.index(col, row) else {
            return;
        };
        if self.cells[r][c] == Cell::WideTail && c > 0 {
            c -= 1;
        }
        if let Cell::Glyph(_, marks) = &mut self.cells[r][c] {
            marks.push(mark);
        }
    }

    /// Final text rows: trailing whitespace trimmed per row, then fully
    /// blank rows removed from both ends (interior blank rows stay).
    pub fn to_lines(&self) -> Vec<String> {
        let rows: Vec<String> = self
            .cells
            .iter()
            .map(|line| {
                let mut text = String::with_capacity(line.len());
                for cell in line {
                    if let Cell::Glyph(ch, marks) = cell {
                        text.push(*ch);
                        text.push_str(marks);
                    }
                }
                text.trim_end().to_string()
            })
            .collect();
        let Some(first) = rows.iter().position(|r| !r.is_empty()) else {
            return Vec::new();
        };
        let last = rows.iter().rposition(|r| !r.is_empty()).unwrap_or(first);
        rows[first..=last].to_vec()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
