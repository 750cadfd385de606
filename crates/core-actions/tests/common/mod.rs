#![allow(dead_code)] // Shared across several integration tests; each binary uses a subset.

use std::path::PathBuf;

use core_actions::{DispatchResult, dispatch};
use core_events::Key;
use core_state::{BranchPolicy, EditorState};
use core_text::Buffer;

/// Build session state over the given lines, cursor at the origin.
pub fn session(lines: &[&str]) -> EditorState {
    EditorState::new(
        Buffer::from_content(&lines.join("\n")),
        PathBuf::from("test.txt"),
        BranchPolicy::default(),
    )
}

pub fn session_with_policy(lines: &[&str], policy: BranchPolicy) -> EditorState {
    EditorState::new(
        Buffer::from_content(&lines.join("\n")),
        PathBuf::from("test.txt"),
        policy,
    )
}

/// Dispatch every character of `keys` as a plain key press.
pub fn press(state: &mut EditorState, keys: &str) {
    for c in keys.chars() {
        dispatch(state, Key::Char(c));
    }
}

pub fn press_key(state: &mut EditorState, key: Key) -> DispatchResult {
    dispatch(state, key)
}

/// Buffer contents as plain strings for assertions.
pub fn lines(state: &EditorState) -> Vec<String> {
    (0..state.buffer.line_count())
        .map(|row| state.buffer.line_string(row).unwrap())
        .collect()
}

/// Clipboard contents as plain strings.
pub fn clipboard(state: &EditorState) -> Vec<String> {
    state
        .clipboard
        .lines()
        .iter()
        .map(|l| l.iter().collect())
        .collect()
}

pub fn cursor(state: &EditorState) -> (usize, usize) {
    (state.cursor.row, state.cursor.col)
}
