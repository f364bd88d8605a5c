//! Exhaustive minimax search for optimal play.
//!
//! The search mutates the single board buffer in place and undoes every
//! trial move on the way back up, so the board is bit-identical after
//! [`best_move`] returns. Scoring is depth-adjusted: a win for the searching
//! player at depth `d` scores `10 - d` and a loss scores `d - 10`, so the
//! search prefers faster wins and slower losses over the flat-score variant.
//! No alpha-beta pruning: the full tree from an empty board is at most 9!
//! leaf paths, and the plain scan keeps the row-major tie-break exact.

use tracing::instrument;

use crate::action::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};

const WIN_SCORE: i32 = 10;

/// Returns the optimal move for `player` on the given board.
///
/// When several moves share the best score, the first one in row-major scan
/// order is chosen, making the result deterministic.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMoves`] if the board is full.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board, player: Player) -> Result<Position, MoveError> {
    let mut best: Option<(Position, i32)> = None;
    for pos in board.legal_moves() {
        board.set(pos, Square::Occupied(player));
        let score = search(board, player, player.opponent(), 1);
        board.set(pos, Square::Empty);

        // Strict improvement only: ties keep the earlier move.
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos).ok_or(MoveError::NoLegalMoves)
}

/// Scores the board from `maximizer`'s perspective with `to_move` next.
fn search(board: &mut Board, maximizer: Player, to_move: Player, depth: i32) -> i32 {
    if let Some(winner) = rules::check_winner(board) {
        return if winner == maximizer {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if rules::is_full(board) {
        return 0;
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in board.legal_moves() {
        board.set(pos, Square::Occupied(to_move));
        let score = search(board, maximizer, to_move.opponent(), depth + 1);
        board.set(pos, Square::Empty);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).expect("test coordinates in bounds")
    }

    fn mark(board: &mut Board, player: Player, cells: &[(usize, usize)]) {
        for (row, col) in cells {
            board.set(pos(*row, *col), Square::Occupied(player));
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X . / O O . / . . .  with X to move: (0,2) wins on the spot.
        let mut board = Board::new();
        mark(&mut board, Player::X, &[(0, 0), (0, 1)]);
        mark(&mut board, Player::O, &[(1, 0), (1, 1)]);

        let chosen = best_move(&mut board, Player::X).expect("moves available");
        assert_eq!(chosen, pos(0, 2));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // X X . / . . . / . . O  with O to move: anything but (0,2) loses.
        let mut board = Board::new();
        mark(&mut board, Player::X, &[(0, 0), (0, 1)]);
        mark(&mut board, Player::O, &[(2, 2)]);

        let chosen = best_move(&mut board, Player::O).expect("moves available");
        assert_eq!(chosen, pos(0, 2));
    }

    #[test]
    fn test_prefers_faster_win() {
        // X . . / X O . / . O X  with X to move. (2,0) wins on the spot;
        // (0,1) sets up a double threat that only wins two plies later.
        // Flat scoring would pick (0,1) on the row-major tie-break, so this
        // pins down the depth-adjusted variant.
        let mut board = Board::new();
        mark(&mut board, Player::X, &[(0, 0), (1, 0), (2, 2)]);
        mark(&mut board, Player::O, &[(1, 1), (2, 1)]);

        let chosen = best_move(&mut board, Player::X).expect("moves available");
        assert_eq!(chosen, pos(2, 0));
    }

    #[test]
    fn test_board_unchanged_after_search() {
        let mut board = Board::new();
        mark(&mut board, Player::X, &[(0, 0)]);
        let snapshot = board.clone();

        best_move(&mut board, Player::O).expect("moves available");
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_replies_center_to_corner_opening() {
        let mut board = Board::new();
        mark(&mut board, Player::X, &[(0, 0)]);

        let chosen = best_move(&mut board, Player::O).expect("moves available");
        assert_eq!(chosen, pos(1, 1));
    }
}
