//! Board coordinates for tic-tac-toe moves.

use serde::{Deserialize, Serialize};

use crate::action::MoveError;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A coordinate on the board: `(row, col)`, 0-indexed, each in `[0, 3)`.
///
/// Positions can only be built through [`Position::new`] or
/// [`Position::from_index`], so a held `Position` is always in bounds and
/// board accesses through it never fail.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from 0-indexed coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is outside
    /// `[0, 3)`.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Returns the row coordinate.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column coordinate.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Converts the position to a row-major board index (0-8).
    pub const fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Creates a position from a row-major board index.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT {
            return None;
        }
        Some(Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    /// All 9 positions in row-major scan order.
    ///
    /// This is the canonical enumeration order: legal-move listing and
    /// minimax tie-breaking both follow it.
    pub const ALL: [Position; SQUARE_COUNT] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];
}
