//! Per-tick render snapshot.
//!
//! The core never draws; once per loop iteration it exposes the visible
//! sub-rectangle of the buffer, the on-screen cursor position, and the
//! composed status line. The consumer (the terminal frontend, or a test)
//! renders or inspects the snapshot however it likes.

use core_state::EditorState;

use crate::status::{StatusContext, format_status};
use crate::viewport::Viewport;

/// One visible screen row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    /// Text clipped to the viewport's column window. Empty for rows past
    /// the end of the buffer.
    pub text: String,
    /// True for filler rows beyond the last buffer line (drawn as `~`).
    pub past_end: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub lines: Vec<RenderLine>,
    /// Cursor position in screen coordinates (row, col).
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub status: String,
}

/// Build the snapshot for the current state and viewport. `message`, when
/// present, displaces the status line for this frame only.
pub fn build_snapshot(
    state: &EditorState,
    viewport: &Viewport,
    message: Option<&str>,
) -> RenderSnapshot {
    let mut lines = Vec::with_capacity(viewport.rows);
    for screen_row in 0..viewport.rows {
        let buffer_row = viewport.view_row + screen_row;
        match state.buffer.line(buffer_row) {
            Some(line) => {
                let text: String = line
                    .iter()
                    .skip(viewport.view_col)
                    .take(viewport.cols)
                    .collect();
                lines.push(RenderLine {
                    text,
                    past_end: false,
                });
            }
            None => lines.push(RenderLine {
                text: String::new(),
                past_end: true,
            }),
        }
    }

    let (cursor_row, cursor_col) = viewport.screen_position(state.cursor);
    let status = format_status(&StatusContext {
        mode: state.mode,
        file_name: &state.file_name,
        line: state.cursor.row,
        total_lines: state.buffer.line_count(),
        col: state.cursor.col,
        message,
    });

    RenderSnapshot {
        lines,
        cursor_row,
        cursor_col,
        status,
    }
}
