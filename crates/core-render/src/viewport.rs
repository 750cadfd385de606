//! Viewport scroll offsets.
//!
//! A pure function of cursor position and visible dimensions, recomputed
//! before every render so the cursor always lies inside the visible window.

use core_text::Position;

/// Visible sub-rectangle of the buffer: scroll offsets plus dimensions.
/// `rows`/`cols` are the text area only; the status line is the caller's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub view_row: usize,
    pub view_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            view_row: 0,
            view_col: 0,
            rows,
            cols,
        }
    }

    /// Shift the offsets the minimal amount needed to bring the cursor into
    /// view.
    pub fn scroll_to(&mut self, cursor: Position) {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);
        if cursor.row < self.view_row {
            self.view_row = cursor.row;
        }
        if cursor.row >= self.view_row + rows {
            self.view_row = cursor.row - rows + 1;
        }
        if cursor.col < self.view_col {
            self.view_col = cursor.col;
        }
        if cursor.col >= self.view_col + cols {
            self.view_col = cursor.col - cols + 1;
        }
    }

    /// Apply a terminal resize: adopt the new dimensions and reset the
    /// vertical offset to the top. The horizontal offset is deliberately
    /// left untouched (historical asymmetry, kept stable).
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.view_row = 0;
    }

    /// Cursor position translated into screen coordinates. Call after
    /// `scroll_to` so the result is inside the window.
    pub fn screen_position(&self, cursor: Position) -> (usize, usize) {
        (
            cursor.row.saturating_sub(self.view_row),
            cursor.col.saturating_sub(self.view_col),
        )
    }
}
