//! Uniformly random move selection.

use super::super::{Board, Position};
use rand::Rng;

/// Picks one empty cell with equal probability, or `None` on a full board.
pub fn pick_random<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.random_range(0..empty.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_only_empty_cells_are_picked() {
        let mut board = Board::new();
        for index in [0, 2, 4, 6, 8] {
            board = board.place(index, Player::X).expect("Free");
        }
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let pos = pick_random(&board, &mut rng).expect("Board has room");
            assert_eq!(board.get(pos), Cell::Empty);
        }
    }

    #[test]
    fn test_full_board_yields_nothing() {
        let board = Board::from_cells([Cell::Occupied(Player::X); 9]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random(&board, &mut rng), None);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let first: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| pick_random(&board, &mut rng)).collect()
        };
        let second: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| pick_random(&board, &mut rng)).collect()
        };
        assert_eq!(first, second);
    }
}
