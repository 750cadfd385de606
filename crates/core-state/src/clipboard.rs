//! Line clipboard for yank/delete/paste.
//!
//! Holds the most recent yanked or deleted line set. Every yank or
//! line-delete replaces the content wholesale; paste reads it without
//! consuming.

use core_text::Line;

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    lines: Vec<Line>,
}

impl Clipboard {
    /// Overwrite the clipboard with a new line set (possibly empty).
    pub fn replace(&mut self, lines: Vec<Line>) {
        self.lines = lines;
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
