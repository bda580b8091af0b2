//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// Three positions whose joint occupancy by one player wins the match.
pub type WinLine = [Position; 3];

/// Every win line on the board.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` holds all three cells of any win line.
#[instrument(skip(board), level = "trace")]
pub fn check_win(board: &Board, player: Player) -> bool {
    check_win_in(board, player, &WIN_LINES)
}

/// Same as [`check_win`] over an arbitrary set of lines.
pub(crate) fn check_win_in(board: &Board, player: Player, lines: &[WinLine]) -> bool {
    let mark = Cell::Occupied(player);
    lines
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the first completed line and who completed it.
///
/// Lets a presentation layer highlight the three winning cells.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        match cell {
            Cell::Occupied(player) if cell == board.get(b) && cell == board.get(c) => {
                Some((player, [a, b, c]))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert!(check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert!(check_win(&board, Player::O));
        assert_eq!(
            winning_line(&board),
            Some((
                Player::O,
                [Position::TopLeft, Position::Center, Position::BottomRight]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert!(!check_win(&board, Player::X));
    }

    #[test]
    fn test_traversal_order_does_not_matter() {
        let board = board_with(
            Player::X,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        let mut reversed = WIN_LINES;
        reversed.reverse();
        let mut rotated = WIN_LINES;
        rotated.rotate_left(3);

        for player in [Player::X, Player::O] {
            let expected = check_win(&board, player);
            assert_eq!(check_win_in(&board, player, &reversed), expected);
            assert_eq!(check_win_in(&board, player, &rotated), expected);
        }
    }
}
