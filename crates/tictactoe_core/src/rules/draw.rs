//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::winner;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let marks = [
            Mark::X, Mark::O, Mark::X,
            Mark::O, Mark::X, Mark::X,
            Mark::O, Mark::X, Mark::O,
        ];
        let board = Board::from_cells(marks.map(Cell::Occupied));

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O
        let marks = [
            Mark::X, Mark::X, Mark::X,
            Mark::O, Mark::O, Mark::X,
            Mark::O, Mark::X, Mark::O,
        ];
        let board = Board::from_cells(marks.map(Cell::Occupied));

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
