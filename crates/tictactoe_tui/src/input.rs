//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves cursor based on arrow keys; stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(TopLeft, KeyCode::Right), TopCenter);
        assert_eq!(move_cursor(Center, KeyCode::Down), BottomCenter);
        assert_eq!(move_cursor(Center, KeyCode::Up), TopCenter);
        assert_eq!(move_cursor(MiddleRight, KeyCode::Left), Center);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(TopRight, KeyCode::Right), TopRight);
        assert_eq!(move_cursor(TopLeft, KeyCode::Up), TopLeft);
        assert_eq!(move_cursor(BottomLeft, KeyCode::Left), BottomLeft);
        assert_eq!(move_cursor(BottomRight, KeyCode::Down), BottomRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Center, KeyCode::Enter), Center);
    }
}
