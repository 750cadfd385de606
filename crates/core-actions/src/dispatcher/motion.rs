//! Normal-mode cursor movement.
//!
//! All moves clamp at buffer edges; there is no wraparound and no scrolling
//! past the first or last line. The caller re-clamps the column afterwards,
//! so these functions only need to keep the row valid.

use core_state::EditorState;

/// One-cell movement for h/j/k/l.
pub(super) fn step(state: &mut EditorState, key: char) {
    let cursor = &mut state.cursor;
    match key {
        'h' => cursor.col = cursor.col.saturating_sub(1),
        'l' => {
            // Stop on the last character, not one past it.
            if cursor.col + 1 < state.buffer.line_len(cursor.row) {
                cursor.col += 1;
            }
        }
        'k' => cursor.row = cursor.row.saturating_sub(1),
        'j' => {
            if cursor.row + 1 < state.buffer.line_count() {
                cursor.row += 1;
            }
        }
        _ => unreachable!("step called with non-motion key"),
    }
}

/// `G`: jump to the counted line when it is in range, otherwise the last
/// line.
pub(super) fn goto_line(state: &mut EditorState) {
    let line_count = state.buffer.line_count();
    state.cursor.row = match state.pending.value() {
        Some(n) if n >= 1 && n - 1 < line_count => n - 1,
        _ => line_count - 1,
    };
}

/// `$`: advance the row by count-1 when that lands in range, then move to
/// the last column of the resulting row.
pub(super) fn to_line_end(state: &mut EditorState) {
    if let Some(n) = state.pending.value() {
        let target = state.cursor.row + n.saturating_sub(1);
        if target < state.buffer.line_count() {
            state.cursor.row = target;
        }
    }
    state.cursor.col = state.buffer.line_len(state.cursor.row).saturating_sub(1);
}
