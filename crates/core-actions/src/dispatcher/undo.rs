//! Undo / redo dispatch.
//!
//! Thin layer over `core_state::UndoHistory`; restoring is handled by the
//! state aggregate so the stored (buffer, cursor) pair lands atomically.

use core_state::EditorState;
use tracing::debug;

pub(super) fn apply_undo(state: &mut EditorState) {
    if state.undo() {
        debug!(target: "actions.undo", index = state.undo.index(), "undo");
    }
}

pub(super) fn apply_redo(state: &mut EditorState) {
    if state.redo() {
        debug!(target: "actions.undo", index = state.undo.index(), "redo");
    }
}
