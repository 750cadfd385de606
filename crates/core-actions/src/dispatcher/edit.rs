//! Text mutation: Normal-mode edits (`x`, `o`, `O`, paste) and the
//! Insert/Replace mode key handlers.
//!
//! Every function that actually changes the buffer clamps the cursor into
//! the valid range for the new buffer shape and then pushes an undo
//! snapshot, so each stored (buffer, cursor) pair is self-consistent.

use core_events::Key;
use core_state::{EditorState, Mode};
use tracing::debug;

use super::DispatchResult;

/// `x`: delete the character under the cursor, if the line has one.
pub(super) fn delete_under_cursor(state: &mut EditorState) {
    if state
        .buffer
        .delete_char(state.cursor.row, state.cursor.col)
        .is_some()
    {
        state.clamp_cursor_col();
        state.push_snapshot();
    }
}

/// `o`: open an empty line below the cursor and enter InsertOpen on it.
pub(super) fn open_line_below(state: &mut EditorState) {
    state.buffer.insert_line(state.cursor.row + 1, Vec::new());
    state.cursor.row += 1;
    state.cursor.col = 0;
    state.mode = Mode::InsertOpen;
    state.push_snapshot();
}

/// `O`: open an empty line at the cursor row (which then holds the cursor)
/// and enter InsertOpen.
pub(super) fn open_line_above(state: &mut EditorState) {
    state.buffer.insert_line(state.cursor.row, Vec::new());
    state.cursor.col = 0;
    state.mode = Mode::InsertOpen;
    state.push_snapshot();
}

/// `p`: insert a copy of every clipboard line after the cursor row.
///
/// The row advances before each insertion whenever the buffer currently
/// holds more than one line, so a multi-line paste lands as a contiguous
/// block below the first inserted line. The check runs against the live
/// buffer on every iteration; pasting into a one-line buffer therefore
/// places the first line above the cursor line. Historical rule, kept.
pub(super) fn paste_after(state: &mut EditorState) {
    if state.clipboard.is_empty() {
        return;
    }
    let lines = state.clipboard.lines().to_vec();
    for line in lines {
        if state.buffer.line_count() > 1 {
            state.cursor.row += 1;
        }
        state.buffer.insert_line(state.cursor.row, line);
    }
    debug!(target: "actions.edit", lines = state.clipboard.len(), row = state.cursor.row, "paste");
    state.clamp_cursor_col();
    state.push_snapshot();
}

/// Insert and InsertOpen share one handler; the distinction is only how the
/// mode was entered.
pub(super) fn handle_insert(state: &mut EditorState, key: Key) -> DispatchResult {
    let row = state.cursor.row;
    let col = state.cursor.col;
    match key {
        Key::Esc => {
            state.mode = Mode::Normal;
            state.cursor.col = col.saturating_sub(1);
        }
        Key::Enter => {
            state.buffer.split_line(row, col);
            state.cursor.row += 1;
            state.cursor.col = 0;
            state.push_snapshot();
        }
        Key::Backspace => {
            if col > 0 {
                state.cursor.col -= 1;
                state.buffer.delete_char(row, col - 1);
                state.push_snapshot();
            } else if let Some(join_col) = state.buffer.join_with_previous(row) {
                state.cursor.row -= 1;
                state.cursor.col = join_col;
                state.push_snapshot();
            }
        }
        Key::Delete => {
            if state.buffer.delete_char(row, col).is_some() {
                state.push_snapshot();
            }
        }
        key => {
            if let Some(c) = key.insertable_char() {
                state.buffer.insert_char(row, col, c);
                state.cursor.col += 1;
                state.push_snapshot();
            }
        }
    }
    DispatchResult::dirty()
}

/// `r`: exactly one key overwrites the character under the cursor, then
/// back to Normal regardless of outcome. Named keys leave the character
/// untouched.
pub(super) fn handle_replace_char(state: &mut EditorState, key: Key) -> DispatchResult {
    if let Key::Char(c) = key
        && state.buffer.replace_char(state.cursor.row, state.cursor.col, c)
    {
        state.push_snapshot();
    }
    state.mode = Mode::Normal;
    DispatchResult::dirty()
}

/// `R`: printable keys overwrite in place and advance; Backspace only moves
/// left without restoring what was overwritten (historical, kept); Esc
/// retreats one column and returns to Normal.
pub(super) fn handle_replace_continuous(state: &mut EditorState, key: Key) -> DispatchResult {
    match key {
        Key::Esc => {
            state.mode = Mode::Normal;
            state.cursor.col = state.cursor.col.saturating_sub(1);
        }
        Key::Backspace => {
            state.cursor.col = state.cursor.col.saturating_sub(1);
        }
        key => {
            if let Some(c) = key.insertable_char()
                && state.buffer.replace_char(state.cursor.row, state.cursor.col, c)
            {
                state.cursor.col += 1;
                state.push_snapshot();
            }
        }
    }
    DispatchResult::dirty()
}
