//! Tests for board evaluation.

use noughts::rules::{check_win, evaluate, is_draw, winning_line};
use noughts::{Board, Cell, Outcome, Player, Position};

const X: Cell = Cell::Occupied(Player::X);
const O: Cell = Cell::Occupied(Player::O);
const E: Cell = Cell::Empty;

/// Visits every board reachable by legal play from `board`.
fn visit_reachable(board: Board, to_move: Player, visit: &mut impl FnMut(&Board)) {
    visit(&board);
    if evaluate(&board) != Outcome::InProgress {
        return;
    }
    for pos in board.empty_cells() {
        let next = board.place(pos.to_index(), to_move).expect("Empty cell");
        visit_reachable(next, to_move.opponent(), visit);
    }
}

#[test]
fn test_top_row_is_won_by_x() {
    let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
    assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    assert_eq!(
        winning_line(&board),
        Some((
            Player::X,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        ))
    );
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
    assert!(board.is_full());
    assert!(is_draw(&board));
    assert_eq!(evaluate(&board), Outcome::Drawn);
    assert_eq!(winning_line(&board), None);
}

#[test]
fn test_no_reachable_board_has_two_winners() {
    let mut boards = 0usize;
    visit_reachable(Board::new(), Player::X, &mut |board| {
        boards += 1;
        assert!(
            !(check_win(board, Player::X) && check_win(board, Player::O)),
            "Both players won on\n{}",
            board
        );

        let outcome = evaluate(board);
        match winning_line(board) {
            Some((player, _)) => assert_eq!(outcome, Outcome::Won(player)),
            None => assert!(outcome.winner().is_none()),
        }
    });
    // Reachable positions including repeats via different move orders.
    assert!(boards > 5_000);
}

#[test]
fn test_status_is_monotone_along_any_line_of_play() {
    let mut board = Board::new();
    let mut player = Player::X;
    // X X O / O O X / X O X played in this order ends in a draw
    for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        assert_eq!(evaluate(&board), Outcome::InProgress);
        board = board.place(index, player).expect("Empty cell");
        player = player.opponent();
    }
    assert_eq!(evaluate(&board), Outcome::Drawn);
}
