//! Key mapping from terminal events to quiz input.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{Direction, Input};

/// Map a key press to an [`Input`].
///
/// Release events map to nothing. Plain and shifted characters are answer text;
/// control/alt chords other than the editing shortcuts are ignored.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Input::Quit);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => Some(Input::Submit),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Char('u') | KeyCode::Char('U') if ctrl => Some(Input::ClearLine),
        KeyCode::Char(c) if !ctrl && !alt => Some(Input::Char(c)),

        KeyCode::F(1) => Some(Input::NextTheme),
        KeyCode::F(2) => Some(Input::ForceTransition),
        KeyCode::F(3) => Some(Input::ToggleDemo),

        KeyCode::Up => Some(Input::Nav(Direction::Up)),
        KeyCode::Down => Some(Input::Nav(Direction::Down)),
        KeyCode::Left => Some(Input::Nav(Direction::Left)),
        KeyCode::Right => Some(Input::Nav(Direction::Right)),

        _ => None,
    }
}

/// Check if key should quit the quiz.
///
/// Letters never quit on their own since they are answer text.
pub fn should_quit(key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc | KeyCode::F(12) => true,
        KeyCode::Char(c) if ctrl => matches!(c, 'c' | 'C' | 'x' | 'X'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(ctrl('c')));
        assert!(should_quit(ctrl('x')));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::F(12))));

        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_quit_keys_map_to_quit() {
        assert_eq!(map_key(ctrl('c')), Some(Input::Quit));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Input::Quit));
    }

    #[test]
    fn test_text_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(Input::Char('a'))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Input::Char('A'))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Input::Char(' '))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Input::Submit));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Backspace)),
            Some(Input::Backspace)
        );
        assert_eq!(map_key(ctrl('u')), Some(Input::ClearLine));
        assert_eq!(map_key(ctrl('a')), None);
    }

    #[test]
    fn test_function_and_arrow_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(1))), Some(Input::NextTheme));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::F(2))),
            Some(Input::ForceTransition)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(3))), Some(Input::ToggleDemo));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(Input::Nav(Direction::Left))
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key), None);
    }
}
