//! Tests for the history state machine: placement, branching and jumps.

use tictactoe_core::{Board, Game, Ignored, Mark, Placement, Position, Status};
use Position::*;

/// Cells 0, 3, 1, 4, 2: X takes the top row on the fifth move.
const TOP_ROW_WIN: [Position; 5] = [TopLeft, MiddleLeft, TopCenter, Center, TopRight];

#[test]
fn test_top_row_win_end_to_end() {
    let game = Game::replay(&TOP_ROW_WIN);

    let board = game.current();
    for pos in [TopLeft, TopCenter, TopRight] {
        assert_eq!(board.mark(pos), Some(Mark::X));
    }
    assert_eq!(game.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(game.status(), Status::Winner(Mark::X));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_classic_draw() {
    // X O X / X O O / O X X
    let game = Game::replay(&[
        TopLeft,
        TopCenter,
        TopRight,
        Center,
        MiddleLeft,
        MiddleRight,
        BottomCenter,
        BottomLeft,
        BottomRight,
    ]);

    assert!(game.current().is_full());
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "Draw");
}

#[test]
fn test_occupied_click_changes_nothing() {
    let mut game = Game::replay(&[Center, TopLeft]);
    let before = game.clone();

    assert_eq!(game.place_mark(Center), Placement::Ignored(Ignored::Occupied(Center)));
    assert_eq!(game.place_mark(TopLeft), Placement::Ignored(Ignored::Occupied(TopLeft)));
    assert_eq!(game, before);
}

#[test]
fn test_click_after_win_changes_nothing() {
    let mut game = Game::replay(&TOP_ROW_WIN);
    let before = game.clone();

    for pos in Position::ALL {
        assert!(!game.place_mark(pos).is_placed());
    }
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.step(), 5);
    assert_eq!(game, before);
}

#[test]
fn test_branch_truncates_future() {
    let mut game = Game::replay(&[TopLeft, Center, BottomRight, TopRight]);
    assert_eq!(game.history().len(), 5);
    let kept: Vec<Board> = game.history()[..3].to_vec();
    let kept_annotations = game.annotations()[..3].to_vec();

    game.jump_to(2);
    assert_eq!(game.history().len(), 5, "jumping alone never truncates");

    assert!(game.place_mark(BottomLeft).is_placed());
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.annotations().len(), 4);
    assert_eq!(&game.history()[..3], kept.as_slice());
    assert_eq!(&game.annotations()[..3], kept_annotations.as_slice());
    assert_eq!(game.step(), 3);
    assert_eq!(game.current().mark(BottomLeft), Some(Mark::X));
    assert_eq!(game.current().mark(BottomRight), None);
}

#[test]
fn test_jump_to_start_after_win() {
    let mut game = Game::replay(&TOP_ROW_WIN);

    game.jump_to(0);
    assert_eq!(game.current(), &Board::new());
    assert_eq!(game.status().to_string(), "Next player: X");
    assert_eq!(game.winning_line(), None);

    assert!(game.place_mark(MiddleRight).is_placed());
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.annotations().len(), 2);
    assert_eq!(game.label(1), "(col 2, row 1)");
    assert_eq!(game.current().mark(MiddleRight), Some(Mark::X));
}

#[test]
fn test_turn_follows_parity_after_jump() {
    let mut game = Game::replay(&[TopLeft, Center, BottomRight]);

    game.jump_to(1);
    assert_eq!(game.status(), Status::NextPlayer(Mark::O));
    assert!(game.place_mark(TopRight).is_placed());
    assert_eq!(game.current().mark(TopRight), Some(Mark::O));

    game.jump_to(0);
    assert_eq!(game.to_move(), Mark::X);
}

#[test]
fn test_jump_before_win_reopens_play() {
    let mut game = Game::replay(&TOP_ROW_WIN);

    game.jump_to(4);
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
    assert!(game.place_mark(BottomRight).is_placed());
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), Status::NextPlayer(Mark::O));
}

#[test]
fn test_stored_snapshots_never_change() {
    let mut game = Game::replay(&[TopLeft, Center]);
    let snapshot = game.history()[1].clone();

    game.jump_to(1);
    let _ = game.place_mark(BottomRight);
    game.jump_to(1);

    assert_eq!(game.history()[1], snapshot);
    assert_eq!(game.history()[1].occupied(), 1);
}
