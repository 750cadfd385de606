//! Input event vocabulary consumed by the dispatch loop.
//!
//! The engine sees a flat stream of discrete events: decoded key presses and
//! inline terminal resizes. Raw terminal decoding lives in `core-input`;
//! everything above it works purely in terms of these types so the editor can
//! be driven headlessly by synthetic sequences in tests.

/// A single decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A plain character key (no modifiers).
    Char(char),
    /// A character pressed with Ctrl held (stored lowercase, e.g. `Ctrl('s')`).
    Ctrl(char),
    Esc,
    Enter,
    Backspace,
    /// Forward delete (the `Delete` key, not backspace).
    Delete,
}

impl Key {
    /// The character this key would insert as text, if any.
    ///
    /// Only plain ASCII non-control characters count as insertable; control
    /// chords and named keys carry editing meaning instead of text.
    pub fn insertable_char(self) -> Option<char> {
        match self {
            Key::Char(c) if c.is_ascii() && !c.is_ascii_control() => Some(c),
            _ => None,
        }
    }
}

/// One event from the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Terminal was resized; carries the new full terminal dimensions.
    Resize { rows: u16, cols: u16 },
}
