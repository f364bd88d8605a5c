//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record the player's
//! intent and can be validated, logged, and serialized independently of
//! execution.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::Player;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// All variants are recoverable at the session boundary: the session returns
/// them as values and the caller decides whether to re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates fall outside the board.
    #[display("coordinates ({row}, {col}) are outside the board")]
    OutOfBounds {
        /// Offending row coordinate.
        row: usize,
        /// Offending column coordinate.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("square {_0} is already occupied")]
    CellOccupied(Position),

    /// A human move was submitted while the session was not awaiting one.
    #[display("session is not awaiting a human move")]
    IllegalState,

    /// The game has already reached a terminal outcome.
    #[display("game is already over")]
    GameAlreadyOver,

    /// A move selector was invoked with no legal moves available.
    #[display("no legal moves available")]
    NoLegalMoves,
}

impl std::error::Error for MoveError {}
