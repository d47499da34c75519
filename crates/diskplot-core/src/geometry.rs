// File: crates/diskplot-core/src/geometry.rs
// Summary: Pixel rectangles and the panel grid split.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`, never inverting the rectangle.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left + 1);
        let bottom = (self.bottom - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    /// Cell `(row, col)` of an evenly divided `rows x cols` grid.
    /// The last row/column absorbs the rounding remainder.
    pub fn grid_cell(&self, rows: usize, cols: usize, row: usize, col: usize) -> Self {
        let rows = rows.max(1) as i32;
        let cols = cols.max(1) as i32;
        let (row, col) = (row as i32, col as i32);
        let cw = self.width() / cols;
        let ch = self.height() / rows;
        let left = self.left + col * cw;
        let top = self.top + row * ch;
        let right = if col + 1 == cols { self.right } else { left + cw };
        let bottom = if row + 1 == rows { self.bottom } else { top + ch };
        Self { left, top, right, bottom }
    }
}
