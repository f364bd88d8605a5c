//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw; the combined check lives in
/// [`super::outcome`].
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::check_winner;
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).expect("test coordinates in bounds")
    }

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(pos(1, 1), Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full, no line.
        let mut board = Board::new();
        let layout = [
            (0, 0, Player::X),
            (0, 1, Player::O),
            (0, 2, Player::X),
            (1, 0, Player::O),
            (1, 1, Player::X),
            (1, 2, Player::X),
            (2, 0, Player::O),
            (2, 1, Player::X),
            (2, 2, Player::O),
        ];
        for (row, col, player) in layout {
            board.set(pos(row, col), Square::Occupied(player));
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for (row, col) in [(0, 0), (0, 1), (0, 2)] {
            board.set(pos(row, col), Square::Occupied(Player::X));
        }
        board.set(pos(1, 0), Square::Occupied(Player::O));
        board.set(pos(1, 1), Square::Occupied(Player::O));
        assert!(!is_draw(&board));
    }
}
