//! Editor state: active mode, clipboard, pending count, undo history, and
//! the `EditorState` aggregate threaded through the dispatch loop.
//!
//! Everything that was once a loose editor-wide variable lives here as a
//! field of [`EditorState`], passed by exclusive reference through dispatch.
//! The state is deliberately renderer-agnostic; `core-render` reads it to
//! build snapshots and `core-actions` mutates it, but neither owns it.

use std::path::PathBuf;

use core_text::{Buffer, Position};

mod clipboard;
pub mod undo;

pub use clipboard::Clipboard;
pub use undo::{BranchPolicy, UndoEntry, UndoHistory};

/// Current interpretation context for key input. Exactly one is active.
///
/// `Insert` and `InsertOpen` behave identically for editing keys; the split
/// mirrors how the mode was entered (`i`/`a`/`A` vs. `o`/`O`) and keeps the
/// enumeration closed over every state the dispatcher can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    InsertOpen,
    /// `r`: the next key overwrites the character under the cursor.
    ReplaceChar,
    /// `R`: keys overwrite in place until Esc.
    ReplaceContinuous,
    /// Operator-pending after `d`.
    Delete,
    /// Operator-pending after `y`.
    Yank,
}

impl Mode {
    /// Status-line label.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert | Mode::InsertOpen => "INSERT",
            Mode::ReplaceChar | Mode::ReplaceContinuous => "REPLACE",
            Mode::Delete => "DELETE",
            Mode::Yank => "YANK",
        }
    }

    /// Whether digit keys accumulate into the pending count in this mode.
    /// In the insert-style and replace modes digits are text (or the
    /// replacement character) instead.
    pub fn accepts_count(self) -> bool {
        matches!(self, Mode::Normal | Mode::Delete | Mode::Yank)
    }
}

/// Numeric prefix accumulated from digit key presses.
///
/// Consumed as a repeat/target count by `G`, `$`, `dd`, and `yy`. An empty
/// or malformed accumulator is never an error; count-taking commands fall
/// back to their defaults.
#[derive(Debug, Clone, Default)]
pub struct PendingCount {
    digits: String,
}

impl PendingCount {
    pub fn push_digit(&mut self, d: char) {
        debug_assert!(d.is_ascii_digit());
        self.digits.push(d);
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// The accumulated count, or `None` when absent or unparseable
    /// (overflow-length digit runs included).
    pub fn value(&self) -> Option<usize> {
        if self.digits.is_empty() {
            return None;
        }
        self.digits.parse().ok()
    }

    /// The count to repeat by, defaulting to 1.
    pub fn value_or_default(&self) -> usize {
        self.value().unwrap_or(1)
    }
}

/// The aggregate owning every editing component for one session.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub buffer: Buffer,
    pub cursor: Position,
    pub mode: Mode,
    pub pending: PendingCount,
    pub clipboard: Clipboard,
    pub undo: UndoHistory,
    /// Path the buffer was loaded from and will be saved to.
    pub file_name: PathBuf,
    /// One-shot status-bar message (save confirmation / failure); taken by
    /// the render path and shown for a single tick.
    status_message: Option<String>,
}

impl EditorState {
    /// Build session state around a freshly loaded buffer, seeding the undo
    /// history with the initial snapshot.
    pub fn new(buffer: Buffer, file_name: PathBuf, branch_policy: BranchPolicy) -> Self {
        let cursor = Position::origin();
        let undo = UndoHistory::new(UndoEntry::new(buffer.clone(), cursor), branch_policy);
        Self {
            buffer,
            cursor,
            mode: Mode::Normal,
            pending: PendingCount::default(),
            clipboard: Clipboard::default(),
            undo,
            file_name,
            status_message: None,
        }
    }

    /// Record the current (buffer, cursor) pair in the undo history. Called
    /// after every buffer-mutating transition, never on pure movement or
    /// mode changes.
    pub fn push_snapshot(&mut self) {
        self.undo
            .push(UndoEntry::new(self.buffer.clone(), self.cursor));
    }

    /// Restore the previous snapshot, if any. Returns whether state changed.
    pub fn undo(&mut self) -> bool {
        if let Some(entry) = self.undo.undo() {
            self.buffer = entry.buffer.clone();
            self.cursor = entry.cursor;
            true
        } else {
            false
        }
    }

    /// Restore the next snapshot, if any. Returns whether state changed.
    pub fn redo(&mut self) -> bool {
        if let Some(entry) = self.undo.redo() {
            self.buffer = entry.buffer.clone();
            self.cursor = entry.cursor;
            true
        } else {
            false
        }
    }

    /// Re-clamp the cursor column into the command-mode range for its row.
    pub fn clamp_cursor_col(&mut self) {
        self.cursor.col = self.buffer.clamp_col(self.cursor.row, self.cursor.col);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Take the pending one-shot status message, leaving `None`.
    pub fn take_status(&mut self) -> Option<String> {
        self.status_message.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(lines: &str) -> EditorState {
        EditorState::new(
            Buffer::from_content(lines),
            PathBuf::from("test.txt"),
            BranchPolicy::default(),
        )
    }

    #[test]
    fn new_state_seeds_undo_with_load_snapshot() {
        let st = state("a\nb");
        assert_eq!(st.undo.len(), 1);
        assert_eq!(st.undo.index(), 0);
    }

    #[test]
    fn undo_restores_buffer_and_cursor() {
        let mut st = state("abc");
        st.buffer.insert_char(0, 0, 'x');
        st.cursor.col = 1;
        st.push_snapshot();
        assert!(st.undo());
        assert_eq!(st.buffer.to_content(), "abc\n");
        assert_eq!(st.cursor, Position::origin());
        assert!(st.redo());
        assert_eq!(st.buffer.to_content(), "xabc\n");
        assert_eq!(st.cursor.col, 1);
    }

    #[test]
    fn undo_at_history_start_is_noop() {
        let mut st = state("abc");
        assert!(!st.undo());
        assert_eq!(st.buffer.to_content(), "abc\n");
    }

    #[test]
    fn pending_count_defaults_and_accumulates() {
        let mut p = PendingCount::default();
        assert_eq!(p.value(), None);
        assert_eq!(p.value_or_default(), 1);
        p.push_digit('1');
        p.push_digit('2');
        assert_eq!(p.value(), Some(12));
        p.clear();
        assert!(p.is_empty());
    }

    #[test]
    fn mode_count_acceptance() {
        assert!(Mode::Normal.accepts_count());
        assert!(Mode::Delete.accepts_count());
        assert!(Mode::Yank.accepts_count());
        assert!(!Mode::Insert.accepts_count());
        assert!(!Mode::InsertOpen.accepts_count());
        assert!(!Mode::ReplaceChar.accepts_count());
        assert!(!Mode::ReplaceContinuous.accepts_count());
    }

    #[test]
    fn status_message_is_one_shot() {
        let mut st = state("a");
        st.set_status("Saved");
        assert_eq!(st.take_status().as_deref(), Some("Saved"));
        assert!(st.take_status().is_none());
    }
}
