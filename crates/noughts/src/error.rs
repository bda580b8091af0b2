//! Error types for board and match operations.

use super::Position;

/// Reason a well-formed move was refused by the match controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The match has already been won or drawn.
    #[display("the match is already over")]
    MatchOver,

    /// A human tried to move while the computer is to play.
    #[display("it is the computer's turn")]
    ComputerToMove,

    /// The computer was asked to move when it is not playing or not on turn.
    #[display("it is not the computer's turn")]
    NotComputerTurn,
}

/// Error returned by engine operations.
///
/// None of these are fatal: the state that produced them is left untouched
/// and the caller may keep playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Index outside 0-8, or a board placement onto an occupied cell.
    #[display("Invalid move at cell {}", _0)]
    InvalidMove(usize),

    /// The move is well-formed but not allowed in the current match state.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// The computer was asked to choose a move on a board with no empty cells.
    #[display("Computer asked to move on a finished board")]
    AiInvokedOnTerminalBoard,
}

impl std::error::Error for GameError {}

impl From<IllegalMove> for GameError {
    fn from(reason: IllegalMove) -> Self {
        GameError::IllegalMove(reason)
    }
}
