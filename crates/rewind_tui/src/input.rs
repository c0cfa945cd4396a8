//! Keyboard handling.

use crate::app::Action;
use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Maps a key press to an application action.
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('o') => Some(Action::ToggleOrder),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Home => Some(Action::JumpToStart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayAtCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(code))
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10)? as usize;
            if (1..=9).contains(&digit) {
                Position::from_index(digit - 1).map(Action::Play)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Moves the board cursor one cell in the direction of an arrow key,
/// staying inside the grid.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let col = cursor.column() as i8 - 1;
    let row = cursor.row() as i8 - 1;
    let (col, row) = match key {
        KeyCode::Left => (col - 1, row),
        KeyCode::Right => (col + 1, row),
        KeyCode::Up => (col, row - 1),
        KeyCode::Down => (col, row + 1),
        _ => (col, row),
    };
    if (0..3).contains(&col) && (0..3).contains(&row) {
        Position::from_index((row * 3 + col) as usize).unwrap_or(cursor)
    } else {
        cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_cells() {
        assert_eq!(
            action_for_key(KeyCode::Char('1')),
            Some(Action::Play(Position::TopLeft))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('9')),
            Some(Action::Play(Position::BottomRight))
        );
        assert_eq!(action_for_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn control_keys_map_to_actions() {
        assert_eq!(action_for_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Char('o')), Some(Action::ToggleOrder));
        assert_eq!(action_for_key(KeyCode::Char('[')), Some(Action::StepBack));
        assert_eq!(action_for_key(KeyCode::Char(']')), Some(Action::StepForward));
        assert_eq!(action_for_key(KeyCode::Home), Some(Action::JumpToStart));
        assert_eq!(action_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn cursor_moves_within_grid() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Left),
            Position::MiddleLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Left),
            Position::TopLeft
        );
    }
}
