//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::win::check_win;
use tracing::instrument;

/// Checks whether the board is a draw: full, with no completed line.
#[instrument(skip(board), level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !check_win(board, Player::X) && !check_win(board, Player::O)
}
