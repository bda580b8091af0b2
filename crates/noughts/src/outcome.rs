//! Outcome of evaluating a board.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of a board or match.
///
/// A match only moves forward: `InProgress` becomes `Won` or `Drawn`, and
/// nothing but a restart brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// Player completed a win line.
    Won(Player),
    /// Board is full with no win line.
    Drawn,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Drawn => None,
        }
    }

    /// Returns true once the match can accept no more moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Drawn => write!(f, "Draw"),
        }
    }
}
