//! Computer opponent.
//!
//! [`choose_move`] dispatches on [`Difficulty`] to one of the move policies.

mod minimax;
mod random;

pub use minimax::{DRAW_SCORE, O_WIN_SCORE, SearchResult, X_WIN_SCORE, minimax};
pub use random::pick_random;

use super::{Board, GameError, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How hard the computer plays.
///
/// `Medium` currently plays exactly like `Easy`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Uniformly random moves.
    Medium,
    /// Full minimax search.
    Hard,
}

/// Chooses a move for `mover` on `board`.
///
/// # Errors
///
/// Returns [`GameError::AiInvokedOnTerminalBoard`] if the board has no empty
/// cells.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    mover: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Position, GameError> {
    let choice = match difficulty {
        Difficulty::Easy | Difficulty::Medium => pick_random(board, rng),
        Difficulty::Hard => minimax(board, mover).index,
    };

    let pos = choice.ok_or(GameError::AiInvokedOnTerminalBoard)?;
    debug!(%pos, "Computer chose move");
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_parses_case_insensitively() {
        assert_eq!(Difficulty::from_str("hard"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("Medium"), Ok(Difficulty::Medium));
        assert!(Difficulty::from_str("impossible").is_err());
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }

    #[test]
    fn test_every_difficulty_rejects_full_board() {
        let board = Board::from_cells([crate::Cell::Occupied(Player::O); 9]);
        let mut rng = StdRng::seed_from_u64(1);
        for difficulty in <Difficulty as strum::IntoEnumIterator>::iter() {
            assert_eq!(
                choose_move(&board, Player::O, difficulty, &mut rng),
                Err(GameError::AiInvokedOnTerminalBoard)
            );
        }
    }

    #[test]
    fn test_easy_and_medium_share_a_policy() {
        let board = Board::new().place(4, Player::X).expect("Free");
        let mut easy_rng = StdRng::seed_from_u64(99);
        let mut medium_rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                choose_move(&board, Player::O, Difficulty::Easy, &mut easy_rng),
                choose_move(&board, Player::O, Difficulty::Medium, &mut medium_rng)
            );
        }
    }
}
