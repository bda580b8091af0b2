//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the controller and the search share one definition of "won" and
//! "drawn".

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_LINES, WinLine, check_win, winning_line};

use super::{Board, Outcome, Player};
use tracing::instrument;

/// Evaluates a board.
///
/// X is checked before O, and any win is reported before a full board is
/// called a draw.
#[instrument(skip(board), level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if check_win(board, Player::X) {
        Outcome::Won(Player::X)
    } else if check_win(board, Player::O) {
        Outcome::Won(Player::O)
    } else if board.is_full() {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}
