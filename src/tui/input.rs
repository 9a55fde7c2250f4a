//! Keyboard mapping for the board.

use crate::games::tictactoe::Coord;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to this cell.
    Cursor(Coord),
    /// Place a mark at this cell.
    Place(Coord),
    /// Start a new game.
    Reset,
    /// Leave the app.
    Quit,
    /// Nothing to do.
    None,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Coord::new(row.wrapping_sub(1), col),
        KeyCode::Down => Coord::new(row + 1, col),
        KeyCode::Left => Coord::new(row, col.wrapping_sub(1)),
        KeyCode::Right => Coord::new(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps a key to an action given the cursor position.
pub fn action_for(cursor: Coord, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Place(cursor),
        KeyCode::Char(c) if c.is_ascii_digit() => Coord::from_keypad(&c.to_string())
            .map_or(Action::None, Action::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Up), Coord::TOP_CENTER);
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Right), Coord::MIDDLE_RIGHT);
        assert_eq!(move_cursor(Coord::TOP_LEFT, KeyCode::Down), Coord::MIDDLE_LEFT);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Coord::TOP_LEFT, KeyCode::Up), Coord::TOP_LEFT);
        assert_eq!(move_cursor(Coord::TOP_LEFT, KeyCode::Left), Coord::TOP_LEFT);
        assert_eq!(move_cursor(Coord::BOTTOM_RIGHT, KeyCode::Down), Coord::BOTTOM_RIGHT);
        assert_eq!(move_cursor(Coord::BOTTOM_RIGHT, KeyCode::Right), Coord::BOTTOM_RIGHT);
    }

    #[test]
    fn test_key_actions() {
        let cursor = Coord::CENTER;
        assert_eq!(action_for(cursor, KeyCode::Enter), Action::Place(Coord::CENTER));
        assert_eq!(action_for(cursor, KeyCode::Char('7')), Action::Place(Coord::BOTTOM_LEFT));
        assert_eq!(action_for(cursor, KeyCode::Char('0')), Action::None);
        assert_eq!(action_for(cursor, KeyCode::Char('r')), Action::Reset);
        assert_eq!(action_for(cursor, KeyCode::Esc), Action::Quit);
    }
}
