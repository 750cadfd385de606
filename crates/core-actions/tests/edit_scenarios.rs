//! End-to-end editing scenarios driven by synthetic key sequences.

mod common;

use common::{clipboard, cursor, lines, press, press_key, session};
use core_events::Key;
use core_state::Mode;

#[test]
fn repeated_x_empties_the_line_without_removing_it() {
    let mut st = session(&["hello"]);
    press(&mut st, "xxxxx");
    assert_eq!(lines(&st), ["".to_string()]);
    assert_eq!(cursor(&st), (0, 0));
    // A sixth press has nothing left to delete.
    press(&mut st, "x");
    assert_eq!(lines(&st), ["".to_string()]);
}

#[test]
fn dd_moves_first_line_to_clipboard() {
    let mut st = session(&["abc", "def"]);
    press(&mut st, "dd");
    assert_eq!(clipboard(&st), ["abc".to_string()]);
    assert_eq!(lines(&st), ["def".to_string()]);
    assert_eq!(st.cursor.row, 0);
    assert_eq!(st.mode, Mode::Normal);
}

#[test]
fn insert_typing_and_escape() {
    let mut st = session(&[""]);
    press(&mut st, "i");
    press(&mut st, "hi");
    press_key(&mut st, Key::Esc);
    assert_eq!(lines(&st), ["hi".to_string()]);
    assert_eq!(st.mode, Mode::Normal);
    assert_eq!(cursor(&st), (0, 1));
}

#[test]
fn yank_then_paste_appends_copy_below_cursor() {
    let mut st = session(&["line1", "line2"]);
    press(&mut st, "yy");
    assert_eq!(clipboard(&st), ["line1".to_string()]);
    press(&mut st, "j");
    press(&mut st, "p");
    assert_eq!(
        lines(&st),
        ["line1".to_string(), "line2".to_string(), "line1".to_string()]
    );
    assert_eq!(st.cursor.row, 2);
}

#[test]
fn multi_line_paste_lands_as_contiguous_block() {
    let mut st = session(&["a", "b", "tail"]);
    press(&mut st, "2yy");
    assert_eq!(clipboard(&st), ["a".to_string(), "b".to_string()]);
    press(&mut st, "p");
    assert_eq!(
        lines(&st),
        [
            "a".to_string(),
            "a".to_string(),
            "b".to_string(),
            "b".to_string(),
            "tail".to_string()
        ]
    );
}

#[test]
fn paste_into_single_line_buffer_inserts_above() {
    // With one line in the buffer the row does not advance before the first
    // insertion, so the pasted line lands above the cursor line.
    let mut st = session(&["only"]);
    press(&mut st, "yyp");
    assert_eq!(lines(&st), ["only".to_string(), "only".to_string()]);
    assert_eq!(st.cursor.row, 0);
}

#[test]
fn paste_with_empty_clipboard_changes_nothing() {
    let mut st = session(&["abc"]);
    let before = st.undo.len();
    press(&mut st, "p");
    assert_eq!(lines(&st), ["abc".to_string()]);
    assert_eq!(st.undo.len(), before);
}

#[test]
fn open_below_enters_insert_open_on_new_line() {
    let mut st = session(&["top", "bottom"]);
    press(&mut st, "o");
    assert_eq!(st.mode, Mode::InsertOpen);
    assert_eq!(cursor(&st), (1, 0));
    press(&mut st, "mid");
    press_key(&mut st, Key::Esc);
    assert_eq!(
        lines(&st),
        ["top".to_string(), "mid".to_string(), "bottom".to_string()]
    );
}

#[test]
fn open_above_keeps_cursor_row() {
    let mut st = session(&["top"]);
    press(&mut st, "O");
    assert_eq!(st.mode, Mode::InsertOpen);
    assert_eq!(cursor(&st), (0, 0));
    press(&mut st, "new");
    press_key(&mut st, Key::Esc);
    assert_eq!(lines(&st), ["new".to_string(), "top".to_string()]);
}

#[test]
fn enter_splits_line_at_cursor() {
    let mut st = session(&["hello world"]);
    press(&mut st, "lllll");
    press(&mut st, "i");
    press_key(&mut st, Key::Enter);
    assert_eq!(lines(&st), ["hello".to_string(), " world".to_string()]);
    assert_eq!(cursor(&st), (1, 0));
}

#[test]
fn backspace_at_column_zero_joins_with_previous_line() {
    let mut st = session(&["ab", "cd"]);
    press(&mut st, "j");
    press(&mut st, "i");
    press_key(&mut st, Key::Backspace);
    assert_eq!(lines(&st), ["abcd".to_string()]);
    assert_eq!(cursor(&st), (0, 2), "cursor sits at the join point");
}

#[test]
fn backspace_on_first_line_column_zero_is_noop() {
    let mut st = session(&["ab"]);
    press(&mut st, "i");
    press_key(&mut st, Key::Backspace);
    assert_eq!(lines(&st), ["ab".to_string()]);
    assert_eq!(cursor(&st), (0, 0));
}

#[test]
fn forward_delete_removes_char_under_cursor_in_insert() {
    let mut st = session(&["abc"]);
    press(&mut st, "i");
    press_key(&mut st, Key::Delete);
    assert_eq!(lines(&st), ["bc".to_string()]);
    assert_eq!(cursor(&st), (0, 0));
}
