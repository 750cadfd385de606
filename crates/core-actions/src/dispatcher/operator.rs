//! Operator-pending modes: `d` (delete lines) and `y` (yank lines).
//!
//! A repeated operator key applies the operation with the pending count;
//! any other key cancels. Either way the mode returns to Normal and the
//! count is consumed. Both operators overwrite the clipboard wholesale.

use core_events::Key;
use core_state::{EditorState, Mode};
use core_text::Line;
use tracing::debug;

use super::DispatchResult;

pub(super) fn handle_delete_pending(state: &mut EditorState, key: Key) -> DispatchResult {
    if key == Key::Char('d') {
        delete_lines(state);
    }
    state.mode = Mode::Normal;
    state.pending.clear();
    DispatchResult::dirty()
}

pub(super) fn handle_yank_pending(state: &mut EditorState, key: Key) -> DispatchResult {
    if key == Key::Char('y') {
        yank_lines(state);
    }
    state.mode = Mode::Normal;
    state.pending.clear();
    DispatchResult::dirty()
}

/// `dd`: remove count lines starting at the cursor row, copying each into
/// the clipboard before removal. Stops early once the buffer is down to its
/// minimal single empty line; deleting the sole remaining line clears it
/// instead of removing it (buffer invariant).
fn delete_lines(state: &mut EditorState) {
    let count = state.pending.value_or_default();
    let mut removed: Vec<Line> = Vec::new();
    for _ in 0..count {
        if state.buffer.is_sole_empty_line() {
            break;
        }
        if let Some(line) = state.buffer.delete_line(state.cursor.row) {
            removed.push(line);
        }
        if state.cursor.row != 0 && state.cursor.row == state.buffer.line_count() {
            state.cursor.row -= 1;
            state.cursor.col = 0;
        }
    }
    debug!(target: "actions.operator", requested = count, removed = removed.len(), "delete_lines");
    let mutated = !removed.is_empty();
    // Wholesale overwrite even when nothing was removed, matching yank.
    state.clipboard.replace(removed);
    if mutated {
        state.clamp_cursor_col();
        state.push_snapshot();
    }
}

/// `yy`: copy count lines starting at the cursor row, stopping at buffer
/// end. Never mutates the buffer and never records an undo snapshot.
fn yank_lines(state: &mut EditorState) {
    let count = state.pending.value_or_default();
    let mut lines: Vec<Line> = Vec::new();
    for i in 0..count {
        match state.buffer.line(state.cursor.row + i) {
            Some(line) => lines.push(line.to_vec()),
            None => break,
        }
    }
    debug!(target: "actions.operator", requested = count, yanked = lines.len(), "yank_lines");
    state.clipboard.replace(lines);
}
