//! Key bindings for keyboard play.

use crate::Direction;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move focus with an arrow key.
    Navigate(Direction),
    /// Place the current mark on the focused cell.
    Mark,
    /// Start a new game.
    NewGame,
    /// Zero both scores.
    ResetScores,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action; unrecognized keys map to `None`.
pub fn action_for(key: KeyCode) -> Option<InputAction> {
    let action = match key {
        KeyCode::Left => InputAction::Navigate(Direction::Left),
        KeyCode::Right => InputAction::Navigate(Direction::Right),
        KeyCode::Up => InputAction::Navigate(Direction::Up),
        KeyCode::Down => InputAction::Navigate(Direction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::Mark,
        KeyCode::Char('n') | KeyCode::Char('N') => InputAction::NewGame,
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::ResetScores,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_navigate() {
        assert_eq!(
            action_for(KeyCode::Left),
            Some(InputAction::Navigate(Direction::Left))
        );
        assert_eq!(
            action_for(KeyCode::Down),
            Some(InputAction::Navigate(Direction::Down))
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(action_for(KeyCode::Tab), None);
        assert_eq!(action_for(KeyCode::Char('5')), None);
    }
}
