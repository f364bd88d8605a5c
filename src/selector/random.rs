//! Uniform random move selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::action::MoveError;
use crate::position::Position;
use crate::types::Board;

/// Picks a uniformly random legal move.
pub fn pick_move(board: &Board, rng: &mut StdRng) -> Result<Position, MoveError> {
    board
        .legal_moves()
        .choose(rng)
        .copied()
        .ok_or(MoveError::NoLegalMoves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use crate::types::{Player, Square};

    #[test]
    fn test_only_selects_legal_moves() {
        let mut board = Board::new();
        // Occupy everything but two squares.
        for pos in Position::ALL.iter().skip(2) {
            board.set(*pos, Square::Occupied(Player::X));
        }
        let legal = board.legal_moves();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let chosen = pick_move(&board, &mut rng).expect("two squares open");
            assert!(legal.contains(&chosen));
        }
    }
}
