//! Terminal input translation.
//!
//! Maps raw crossterm events onto the engine's [`core_events`] vocabulary
//! and exposes one blocking call, [`read_event`], that the synchronous
//! dispatch loop parks on. Keys and resize notifications arrive inline on
//! the same stream; nothing here spawns threads or buffers ahead.

use anyhow::Result;
use core_events::{InputEvent, Key};
use crossterm::event::{
    Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind,
    KeyModifiers as CKeyModifiers,
};

/// Block until the next event the engine understands.
///
/// Events that do not map (releases, function keys, mouse input) are
/// swallowed and the wait continues.
pub fn read_event() -> Result<InputEvent> {
    loop {
        match crossterm::event::read()? {
            CEvent::Key(key) => {
                if let Some(mapped) = map_key_event(&key) {
                    return Ok(InputEvent::Key(mapped));
                }
            }
            CEvent::Resize(cols, rows) => return Ok(InputEvent::Resize { rows, cols }),
            _ => {}
        }
    }
}

/// Map a crossterm key event into an engine key, or `None` for events the
/// engine has no use for.
pub fn map_key_event(event: &CKeyEvent) -> Option<Key> {
    if event.kind == CKeyEventKind::Release {
        return None;
    }
    match event.code {
        CKeyCode::Char(c) => {
            if event.modifiers.contains(CKeyModifiers::CONTROL) {
                Some(Key::Ctrl(c.to_ascii_lowercase()))
            } else {
                Some(Key::Char(c))
            }
        }
        CKeyCode::Esc => Some(Key::Esc),
        CKeyCode::Enter => Some(Key::Enter),
        CKeyCode::Backspace => Some(Key::Backspace),
        CKeyCode::Delete => Some(Key::Delete),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState as CKeyEventState;

    fn key_event(code: CKeyCode, modifiers: CKeyModifiers, kind: CKeyEventKind) -> CKeyEvent {
        CKeyEvent {
            code,
            modifiers,
            kind,
            state: CKeyEventState::empty(),
        }
    }

    #[test]
    fn maps_plain_char() {
        let ev = key_event(
            CKeyCode::Char('x'),
            CKeyModifiers::NONE,
            CKeyEventKind::Press,
        );
        assert_eq!(map_key_event(&ev), Some(Key::Char('x')));
    }

    #[test]
    fn shifted_chars_arrive_as_their_character() {
        // crossterm delivers `G` as Char('G') with SHIFT set; the engine
        // only cares about the character.
        let ev = key_event(
            CKeyCode::Char('G'),
            CKeyModifiers::SHIFT,
            CKeyEventKind::Press,
        );
        assert_eq!(map_key_event(&ev), Some(Key::Char('G')));
    }

    #[test]
    fn control_chords_normalize_to_lowercase() {
        let ev = key_event(
            CKeyCode::Char('S'),
            CKeyModifiers::CONTROL,
            CKeyEventKind::Press,
        );
        assert_eq!(map_key_event(&ev), Some(Key::Ctrl('s')));
    }

    #[test]
    fn maps_named_keys() {
        for (code, expected) in [
            (CKeyCode::Esc, Key::Esc),
            (CKeyCode::Enter, Key::Enter),
            (CKeyCode::Backspace, Key::Backspace),
            (CKeyCode::Delete, Key::Delete),
        ] {
            let ev = key_event(code, CKeyModifiers::NONE, CKeyEventKind::Press);
            assert_eq!(map_key_event(&ev), Some(expected));
        }
    }

    #[test]
    fn ignores_releases_and_unknown_keys() {
        let release = key_event(
            CKeyCode::Char('a'),
            CKeyModifiers::NONE,
            CKeyEventKind::Release,
        );
        assert_eq!(map_key_event(&release), None);
        let fkey = key_event(CKeyCode::F(5), CKeyModifiers::NONE, CKeyEventKind::Press);
        assert_eq!(map_key_event(&fkey), None);
    }
}
