//! The mode state machine.
//!
//! One entry point, [`dispatch`], applies a single key event to the session
//! state and reports whether a redraw or a quit is needed. Handling is
//! decomposed per concern:
//!
//! * `motion`   - cursor movement (h/j/k/l, g, G, 0, $) and clamping
//! * `edit`     - text mutation (x, paste, insert- and replace-mode keys)
//! * `operator` - the pending Delete/Yank modes (dd, yy, cancellation)
//! * `undo`     - undo/redo dispatch
//!
//! Ordering rules shared by every Normal-mode key:
//!
//! * Digits 1-9 (and 0 once the accumulator is non-empty) feed the pending
//!   count and bypass everything else; the count survives entering Delete or
//!   Yank mode and is cleared by any other key.
//! * The cursor column is re-clamped after every Normal command except `A`,
//!   which positions one past the last character on purpose.
//! * Session chords (Ctrl-S save, Ctrl-Q quit) are evaluated after mode
//!   handling, so in an operator-pending mode they first cancel the
//!   operator, matching the historical loop tail.

use core_events::Key;
use core_state::{EditorState, Mode};
use tracing::debug;

use crate::io_ops;

mod edit;
mod motion;
mod operator;
mod undo;

/// Result of dispatching a single key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// A visible change happened; the frontend should redraw.
    pub dirty: bool,
    /// The session should end and control return to the caller.
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }

    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
}

/// Apply one key event to the session. This is the only mutation path into
/// buffer, clipboard, cursor, and undo history.
pub fn dispatch(state: &mut EditorState, key: Key) -> DispatchResult {
    // Count accumulation comes first and swallows the key. `0` is handled
    // in Normal dispatch instead because of its dual role (start-of-line
    // vs. continuing a multi-digit count).
    if state.mode.accepts_count()
        && let Key::Char(c) = key
        && c.is_ascii_digit()
        && c != '0'
    {
        state.pending.push_digit(c);
        return DispatchResult::clean();
    }

    let mut result = match state.mode {
        Mode::Normal => handle_normal(state, key),
        Mode::Insert | Mode::InsertOpen => edit::handle_insert(state, key),
        Mode::ReplaceChar => edit::handle_replace_char(state, key),
        Mode::ReplaceContinuous => edit::handle_replace_continuous(state, key),
        Mode::Delete => operator::handle_delete_pending(state, key),
        Mode::Yank => operator::handle_yank_pending(state, key),
    };

    match key {
        Key::Ctrl('q') => {
            debug!(target: "actions.dispatch", "quit");
            result.quit = true;
        }
        Key::Ctrl('s') => {
            io_ops::save_with_status(state);
            result.dirty = true;
        }
        _ => {}
    }
    result
}

fn handle_normal(state: &mut EditorState, key: Key) -> DispatchResult {
    match key {
        Key::Char(c) => match c {
            'h' | 'j' | 'k' | 'l' => motion::step(state, c),
            'g' => state.cursor = core_text::Position::origin(),
            'G' => motion::goto_line(state),
            '$' => motion::to_line_end(state),
            '0' => {
                if state.pending.is_empty() {
                    state.cursor.col = 0;
                } else {
                    // Continuing a multi-digit count; keep the accumulator.
                    state.pending.push_digit('0');
                    return DispatchResult::clean();
                }
            }
            'i' => state.mode = Mode::Insert,
            'a' => {
                state.cursor.col += 1;
                state.mode = Mode::Insert;
            }
            'A' => {
                state.cursor.col = state.buffer.line_len(state.cursor.row);
                state.mode = Mode::Insert;
                // Deliberately one past the last character; skip the clamp.
                state.pending.clear();
                return DispatchResult::dirty();
            }
            'o' => edit::open_line_below(state),
            'O' => edit::open_line_above(state),
            'r' => state.mode = Mode::ReplaceChar,
            'R' => state.mode = Mode::ReplaceContinuous,
            'x' => edit::delete_under_cursor(state),
            'd' => state.mode = Mode::Delete,
            'y' => state.mode = Mode::Yank,
            'p' => edit::paste_after(state),
            'u' => undo::apply_undo(state),
            _ => {}
        },
        Key::Ctrl('r') => undo::apply_redo(state),
        _ => {}
    }

    state.clamp_cursor_col();
    // Entering an operator mode keeps the count (e.g. `3dd`); anything else
    // consumes it.
    if !matches!(state.mode, Mode::Delete | Mode::Yank) {
        state.pending.clear();
    }
    DispatchResult::dirty()
}
