//! Key mapping from terminal events to game actions.

use crate::types::{Action, Spin};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game action.
///
/// Repeat and release events, and chords with Ctrl, map to nothing.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::MoveDown),

        // Rotation
        KeyCode::Up | KeyCode::Char('e') | KeyCode::Char('E') => Some(Action::Rotate(Spin::Cw)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(Action::Rotate(Spin::Ccw))
        }

        KeyCode::Char(' ') => Some(Action::Drop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && (key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(action_for_key(press(KeyCode::Left)), Some(Action::MoveLeft));
        assert_eq!(action_for_key(press(KeyCode::Right)), Some(Action::MoveRight));
        assert_eq!(action_for_key(press(KeyCode::Down)), Some(Action::MoveDown));

        assert_eq!(action_for_key(press(KeyCode::Char('A'))), Some(Action::MoveLeft));
        assert_eq!(action_for_key(press(KeyCode::Char('d'))), Some(Action::MoveRight));
        assert_eq!(action_for_key(press(KeyCode::Char('s'))), Some(Action::MoveDown));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            action_for_key(press(KeyCode::Up)),
            Some(Action::Rotate(Spin::Cw))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('e'))),
            Some(Action::Rotate(Spin::Cw))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('q'))),
            Some(Action::Rotate(Spin::Ccw))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('Z'))),
            Some(Action::Rotate(Spin::Ccw))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(action_for_key(press(KeyCode::Char(' '))), Some(Action::Drop));
        assert_eq!(action_for_key(press(KeyCode::Char('r'))), Some(Action::Restart));
        assert_eq!(action_for_key(press(KeyCode::Char('x'))), None);
        assert_eq!(action_for_key(press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_repeat_and_release_ignored() {
        for kind in [KeyEventKind::Repeat, KeyEventKind::Release] {
            let key = KeyEvent::new_with_kind_and_state(
                KeyCode::Left,
                KeyModifiers::NONE,
                kind,
                KeyEventState::NONE,
            );
            assert_eq!(action_for_key(key), None);
        }
    }

    #[test]
    fn test_ctrl_chords_ignored() {
        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(key), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(press(KeyCode::Char('q'))));
        assert!(!should_quit(press(KeyCode::Char('c'))));
    }
}
