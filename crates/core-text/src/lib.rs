//! Line-oriented text buffer.
//!
//! The buffer is an ordered sequence of lines, each line an ordered sequence
//! of Unicode code points. Columns are code-point positions, not rendered
//! widths; grapheme-aware arithmetic is explicitly out of scope. Two
//! invariants hold at all times:
//!
//! * The buffer contains at least one line. Deleting the sole remaining line
//!   clears its contents instead of removing it.
//! * Out-of-range access is never an error: read accessors return `Option`
//!   and mutators are silent no-ops, because every caller in the engine
//!   treats a bad index as "nothing to do".

pub mod content;

pub use content::{from_content, to_content};

/// One row of text as an ordered sequence of code points.
pub type Line = Vec<char>;

/// A cursor position as (row, column), both 0-based.
///
/// The permitted column range depends on the active mode: command-driven
/// modes clamp to the last character, insert-style modes allow one past the
/// end. `Buffer::clamp_col` implements the command-mode rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// In-memory ordered collection of text lines under edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// A buffer holding a single empty line (the minimal valid buffer).
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Build a buffer from raw file content. See [`content::from_content`].
    pub fn from_content(raw: &str) -> Self {
        Self {
            lines: content::from_content(raw),
        }
    }

    /// Serialize back to file content. See [`content::to_content`].
    pub fn to_content(&self) -> String {
        content::to_content(&self.lines)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&[char]> {
        self.lines.get(row).map(Vec::as_slice)
    }

    /// Length in code points of the given line, or 0 out of range.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Vec::len)
    }

    /// The line rendered as a `String`, or `None` out of range.
    pub fn line_string(&self, row: usize) -> Option<String> {
        self.lines.get(row).map(|l| l.iter().collect())
    }

    /// True when the buffer is in its minimal state: one line, no content.
    pub fn is_sole_empty_line(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Insert a line at `row`, shifting the rest down. A row past the end
    /// appends.
    pub fn insert_line(&mut self, row: usize, line: Line) {
        let row = row.min(self.lines.len());
        self.lines.insert(row, line);
    }

    /// Remove the line at `row`, returning its content.
    ///
    /// If this would leave the buffer empty, the sole line is cleared instead
    /// of removed (its old content is still returned). Out of range: `None`.
    pub fn delete_line(&mut self, row: usize) -> Option<Line> {
        if row >= self.lines.len() {
            return None;
        }
        if self.lines.len() == 1 {
            Some(std::mem::take(&mut self.lines[0]))
        } else {
            Some(self.lines.remove(row))
        }
    }

    /// Split the line at `row` in two: it keeps `[0, col)`, the remainder
    /// becomes a new line at `row + 1`. `col` is clamped to the line length.
    pub fn split_line(&mut self, row: usize, col: usize) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let col = col.min(line.len());
        let rest = line.split_off(col);
        self.lines.insert(row + 1, rest);
    }

    /// Append line `row` to the line above it and remove line `row`.
    ///
    /// Returns the column of the join point in the combined line (the old
    /// length of the previous line), or `None` when there is no previous
    /// line or `row` is out of range.
    pub fn join_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.lines.len() {
            return None;
        }
        let tail = self.lines.remove(row);
        let prev = &mut self.lines[row - 1];
        let join_col = prev.len();
        prev.extend(tail);
        Some(join_col)
    }

    /// Insert one character at (row, col). `col` may be one past the end of
    /// the line (append); anything further out of range is a no-op.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        if let Some(line) = self.lines.get_mut(row)
            && col <= line.len()
        {
            line.insert(col, ch);
        }
    }

    /// Remove and return the character at (row, col), or `None` out of range.
    pub fn delete_char(&mut self, row: usize, col: usize) -> Option<char> {
        let line = self.lines.get_mut(row)?;
        if col < line.len() {
            Some(line.remove(col))
        } else {
            None
        }
    }

    /// Overwrite the character at (row, col). Returns whether a character
    /// was actually replaced; out of range is a no-op.
    pub fn replace_char(&mut self, row: usize, col: usize, ch: char) -> bool {
        if let Some(line) = self.lines.get_mut(row)
            && col < line.len()
        {
            line[col] = ch;
            true
        } else {
            false
        }
    }

    /// Clamp a column into the command-mode range for `row`:
    /// `[0, max(0, len - 1)]`, i.e. on the last character, or 0 on an empty
    /// line.
    pub fn clamp_col(&self, row: usize, col: usize) -> usize {
        col.min(self.line_len(row).saturating_sub(1))
    }
}
