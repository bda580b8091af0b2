//! First-class invariants for a match.
//!
//! Invariants are logical properties that must hold after every move. The
//! controller checks them in debug builds; they can also be tested on their
//! own.

use super::{Board, Cell, MatchState, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: X moves first and players alternate, so X has the same number
/// of marks as O or exactly one more.
pub struct BoardConsistent;

impl Invariant<MatchState> for BoardConsistent {
    fn holds(state: &MatchState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: replaying the history onto an empty board reproduces the
/// board, and no move ever overwrote a mark.
pub struct HistoryConsistent;

impl Invariant<MatchState> for HistoryConsistent {
    fn holds(state: &MatchState) -> bool {
        let mut replayed = Board::new();
        for mov in state.history() {
            if !replayed.is_empty(mov.position) {
                warn!(%mov, "History overwrites an occupied cell");
                return false;
            }
            replayed.set(mov.position, Cell::Occupied(mov.player));
        }

        let valid = replayed == *state.board();
        if !valid {
            warn!(moves = state.history().len(), "History does not match board");
        }
        valid
    }

    fn description() -> &'static str {
        "History replays to the current board"
    }
}

/// Returns the description of every invariant `state` violates.
pub fn violations(state: &MatchState) -> Vec<&'static str> {
    let mut violated = Vec::new();
    if !BoardConsistent::holds(state) {
        violated.push(BoardConsistent::description());
    }
    if !HistoryConsistent::holds(state) {
        violated.push(HistoryConsistent::description());
    }
    violated
}
