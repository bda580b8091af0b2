//! Exhaustive minimax search.
//!
//! Scores are always from O's point of view: O maximizes, X minimizes.
//! The computer only ever plays O, so this is the side that matters. Asking
//! the search to pick a move for X still returns the move that is best for
//! X under that scoring, but the score itself stays O-relative.

use super::super::{Board, Cell, Player, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a board X has won.
pub const X_WIN_SCORE: i32 = -10;
/// Score of a board O has won.
pub const O_WIN_SCORE: i32 = 10;
/// Score of a drawn board.
pub const DRAW_SCORE: i32 = 0;

/// Best move found from a node, with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Move to play; `None` at a terminal node.
    pub index: Option<Position>,
    /// Value of the node under best play by both sides.
    pub score: i32,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

/// Runs a full-depth search for `mover` on `board`.
///
/// The caller's board is never modified: the search works on its own copy,
/// placing and undoing marks as it descends. Children are visited in index
/// order and ties keep the first child seen, so the result is deterministic.
#[instrument(skip(board), fields(empty = board.empty_cells().len()))]
pub fn minimax(board: &Board, mover: Player) -> SearchResult {
    let mut search = Search {
        board: *board,
        nodes: 0,
    };
    let result = search.run(mover);
    debug_assert_eq!(search.board, *board, "search must restore the board");
    debug!(nodes = search.nodes, ?result, "Search complete");
    result
}

struct Search {
    board: Board,
    nodes: u64,
}

impl Search {
    fn run(&mut self, mover: Player) -> SearchResult {
        self.nodes += 1;

        if rules::check_win(&self.board, Player::X) {
            return SearchResult::terminal(X_WIN_SCORE);
        }
        if rules::check_win(&self.board, Player::O) {
            return SearchResult::terminal(O_WIN_SCORE);
        }

        let mut best: Option<SearchResult> = None;
        for pos in self.board.empty_cells() {
            self.board.set(pos, Cell::Occupied(mover));
            let score = self.run(mover.opponent()).score;
            self.board.set(pos, Cell::Empty);

            let improves = match best {
                None => true,
                Some(current) => match mover {
                    Player::O => score > current.score,
                    Player::X => score < current.score,
                },
            };
            if improves {
                best = Some(SearchResult {
                    index: Some(pos),
                    score,
                });
            }
        }

        best.unwrap_or(SearchResult::terminal(DRAW_SCORE))
    }
}
