//! Win and draw detection over the board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, Outcome};

/// Computes the outcome of a board.
///
/// The winner check takes precedence over the draw check: a full board with
/// a completed line reports `Win`, never `Draw`.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
