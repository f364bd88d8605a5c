//! Move selection strategies for the automated opponent.
//!
//! Two interchangeable strategies, chosen at configuration time: a uniform
//! random pick over the legal moves (weak opponent) and an exhaustive
//! minimax search (optimal opponent). Both are functions of the board and
//! the player to move; neither leaves the board mutated after returning.

mod minimax;
mod random;

pub use minimax::best_move;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::action::MoveError;
use crate::position::Position;
use crate::types::{Board, Player};

/// Which strategy the automated opponent uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Uniform random choice among legal moves.
    Random,
    /// Exhaustive minimax search to terminal positions.
    Minimax,
}

/// A configured move selector.
///
/// The random variant owns its RNG so that a seeded session replays
/// identically; the minimax variant is stateless.
#[derive(Debug)]
pub enum MoveSelector {
    /// Uniform random selection.
    Random(StdRng),
    /// Minimax selection.
    Minimax,
}

impl MoveSelector {
    /// Builds a selector for the given strategy.
    ///
    /// `seed` fixes the random strategy's RNG for reproducible games; it is
    /// ignored by minimax, which is already deterministic.
    pub fn new(kind: StrategyKind, seed: Option<u64>) -> Self {
        match kind {
            StrategyKind::Random => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                MoveSelector::Random(rng)
            }
            StrategyKind::Minimax => MoveSelector::Minimax,
        }
    }

    /// Returns the strategy kind of this selector.
    pub fn kind(&self) -> StrategyKind {
        match self {
            MoveSelector::Random(_) => StrategyKind::Random,
            MoveSelector::Minimax => StrategyKind::Minimax,
        }
    }

    /// Selects a move for `player` on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMoves`] if the board has no empty square.
    /// Correct session sequencing never invokes a selector on a full board,
    /// but the condition is a checked error rather than a panic.
    #[instrument(skip(self, board), fields(strategy = ?self.kind()))]
    pub fn select(&mut self, board: &mut Board, player: Player) -> Result<Position, MoveError> {
        let chosen = match self {
            MoveSelector::Random(rng) => random::pick_move(board, rng)?,
            MoveSelector::Minimax => minimax::best_move(board, player)?,
        };
        debug!(%chosen, %player, "Selected move");
        Ok(chosen)
    }
}
