//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::position::Position;
use crate::types::{Board, Player, Square};

const LINES: [[Position; 3]; 8] = {
    const fn p(row: usize, col: usize) -> Position {
        match Position::from_index(row * 3 + col) {
            Some(pos) => pos,
            None => panic!("line table coordinate out of range"),
        }
    }
    [
        // Rows
        [p(0, 0), p(0, 1), p(0, 2)],
        [p(1, 0), p(1, 1), p(1, 2)],
        [p(2, 0), p(2, 1), p(2, 2)],
        // Columns
        [p(0, 0), p(1, 0), p(2, 0)],
        [p(0, 1), p(1, 1), p(2, 1)],
        [p(0, 2), p(1, 2), p(2, 2)],
        // Diagonals
        [p(0, 0), p(1, 1), p(2, 2)],
        [p(0, 2), p(1, 1), p(2, 0)],
    ]
};

/// Checks if there is a winner on the board.
///
/// Every call scans all 8 lines (3 rows, 3 columns, 2 diagonals) with no
/// early return. On a board where both players somehow hold a completed line
/// (unreachable in legal play), the first winning line in scan order
/// determines the reported player.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let mut winner = None;
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if winner.is_none() {
                winner = match sq {
                    Square::Occupied(player) => Some(player),
                    Square::Empty => None,
                };
            }
        }
    }
    winner
}
