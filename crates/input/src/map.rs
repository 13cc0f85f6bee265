//! Key mapping from terminal events to logical engine keys.
//!
//! The same physical key means different things in the menu and during play
//! (↑ rotates while playing but moves the menu cursor), so mapping takes the
//! current engine state.

use crate::types::{EngineState, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to a logical key for the given engine state.
pub fn map_key(event: KeyEvent, state: EngineState) -> Option<Key> {
    map_key_code(event.code, state)
}

/// Map a bare key code to a logical key for the given engine state.
pub fn map_key_code(code: KeyCode, state: EngineState) -> Option<Key> {
    match state {
        EngineState::Playing => map_play(code),
        EngineState::Menu => map_menu(code),
        EngineState::Lost | EngineState::Won => None,
    }
}

fn map_play(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Key::Down),

        KeyCode::Up
        | KeyCode::Char(' ')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Key::Rotate),

        KeyCode::Esc => Some(Key::Escape),

        _ => None,
    }
}

fn map_menu(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Key::MenuUp),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Key::MenuDown),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Key::MenuLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Key::MenuRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Key::MenuConfirm),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Whether the event is a key release.
///
/// Only terminals with keyboard enhancement enabled ever report these.
pub fn is_release(event: KeyEvent) -> bool {
    event.kind == KeyEventKind::Release
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn play(code: KeyCode) -> Option<Key> {
        map_key(KeyEvent::from(code), EngineState::Playing)
    }

    fn menu(code: KeyCode) -> Option<Key> {
        map_key(KeyEvent::from(code), EngineState::Menu)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(play(KeyCode::Left), Some(Key::Left));
        assert_eq!(play(KeyCode::Right), Some(Key::Right));
        assert_eq!(play(KeyCode::Down), Some(Key::Down));

        assert_eq!(play(KeyCode::Char('H')), Some(Key::Left));
        assert_eq!(play(KeyCode::Char('d')), Some(Key::Right));
        assert_eq!(play(KeyCode::Char('J')), Some(Key::Down));
        assert_eq!(play(KeyCode::Char('s')), Some(Key::Down));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(play(KeyCode::Up), Some(Key::Rotate));
        assert_eq!(play(KeyCode::Char(' ')), Some(Key::Rotate));
        assert_eq!(play(KeyCode::Char('k')), Some(Key::Rotate));
        assert_eq!(play(KeyCode::Char('W')), Some(Key::Rotate));
    }

    #[test]
    fn test_escape_in_both_states() {
        assert_eq!(play(KeyCode::Esc), Some(Key::Escape));
        assert_eq!(menu(KeyCode::Esc), Some(Key::Escape));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu(KeyCode::Up), Some(Key::MenuUp));
        assert_eq!(menu(KeyCode::Char('w')), Some(Key::MenuUp));
        assert_eq!(menu(KeyCode::Down), Some(Key::MenuDown));
        assert_eq!(menu(KeyCode::Left), Some(Key::MenuLeft));
        assert_eq!(menu(KeyCode::Char('l')), Some(Key::MenuRight));
        assert_eq!(menu(KeyCode::Enter), Some(Key::MenuConfirm));
        assert_eq!(menu(KeyCode::Char(' ')), Some(Key::MenuConfirm));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(play(KeyCode::Enter), None);
        assert_eq!(play(KeyCode::Char('x')), None);
        assert_eq!(menu(KeyCode::Tab), None);
        assert_eq!(map_key_code(KeyCode::Left, EngineState::Lost), None);
        assert_eq!(map_key_code(KeyCode::Esc, EngineState::Won), None);
    }

    #[test]
    fn test_release_detection() {
        let press = KeyEvent::from(KeyCode::Left);
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!is_release(press));
        assert!(is_release(release));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
