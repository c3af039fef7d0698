//! Key mapping from terminal events to raw game events.

use crate::types::RawEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a raw event.
///
/// Only presses count; release and auto-repeat reports are ignored.
pub fn map_key_event(key: KeyEvent) -> Option<RawEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_quit(key) {
        return Some(RawEvent::Quit);
    }

    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(RawEvent::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(RawEvent::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(RawEvent::Down),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(RawEvent::Up),
        KeyCode::Char(' ') => Some(RawEvent::HardDrop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), Some(RawEvent::Left));
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Right)),
            Some(RawEvent::Right)
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Down)), Some(RawEvent::Down));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Up)), Some(RawEvent::Up));
    }

    #[test]
    fn test_letter_aliases() {
        let char_key = |c| map_key_event(KeyEvent::from(KeyCode::Char(c)));
        assert_eq!(char_key('H'), Some(RawEvent::Left));
        assert_eq!(char_key('d'), Some(RawEvent::Right));
        assert_eq!(char_key('j'), Some(RawEvent::Down));
        assert_eq!(char_key('W'), Some(RawEvent::Up));
    }

    #[test]
    fn test_space_hard_drops() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(RawEvent::HardDrop)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(RawEvent::Quit)
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Esc)), Some(RawEvent::Quit));
        assert!(is_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!is_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_unmapped_and_released_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Enter)), None);

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(release), None);

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..release
        };
        assert_eq!(map_key_event(repeat), None);
    }
}
