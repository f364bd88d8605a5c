//! Game session management: the controller that drives a human-vs-automated
//! game through the rules engine and the move selector.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules;
use crate::selector::{MoveSelector, StrategyKind};
use crate::types::{Board, Outcome, Player, Square};

/// Configuration for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Which mark the human side plays. The automated side gets the
    /// opponent mark.
    pub human_mark: Player,
    /// Strategy for the automated opponent.
    pub strategy: StrategyKind,
    /// Seed for the random strategy's RNG; `None` seeds from entropy.
    /// Ignored by minimax.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: Player::X,
            strategy: StrategyKind::Minimax,
            seed: None,
        }
    }
}

/// Phase of the session state machine.
///
/// `AwaitingAutomated` is normally transient: the automated reply runs
/// synchronously inside [`GameSession::submit_human_move`]. It is only
/// observable if the selector fails, which correct sequencing rules out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the human side to submit a move.
    AwaitingHuman,
    /// The automated side is due to move.
    AwaitingAutomated,
    /// The game has ended; no further moves are accepted.
    Terminal(Outcome),
}

/// Result of an accepted human move: the move itself, the automated reply
/// (absent when the human move ended the game), and the resulting outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The human move that was applied.
    pub human: Move,
    /// The automated reply, if the game was still open.
    pub automated: Option<Move>,
    /// Outcome after both moves.
    pub outcome: Outcome,
}

/// A single game of human versus automated opponent.
///
/// Created by [`start_game`]; mutated once per accepted move; once the
/// outcome is terminal the session rejects everything with
/// [`MoveError::GameAlreadyOver`] and a fresh session must be created to
/// play again.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    human: Player,
    automated: Player,
    selector: MoveSelector,
    phase: GamePhase,
    history: Vec<Move>,
}

/// Starts a new game with the given configuration.
///
/// The human moves first with their configured mark, so the session begins
/// in [`GamePhase::AwaitingHuman`].
#[instrument]
pub fn start_game(config: GameConfig) -> GameSession {
    info!(
        human_mark = %config.human_mark,
        strategy = ?config.strategy,
        "Starting new game session"
    );
    GameSession {
        board: Board::new(),
        human: config.human_mark,
        automated: config.human_mark.opponent(),
        selector: MoveSelector::new(config.strategy, config.seed),
        phase: GamePhase::AwaitingHuman,
        history: Vec::new(),
    }
}

impl GameSession {
    /// Submits the human move at `(row, col)` and, if the game stays open,
    /// immediately plays the automated reply.
    ///
    /// The turn is processed to completion before this returns: the
    /// reported outcome already accounts for the automated move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] once the session is terminal.
    /// - [`MoveError::IllegalState`] if the session is not awaiting a human
    ///   move.
    /// - [`MoveError::OutOfBounds`] for coordinates outside `[0, 3)`.
    /// - [`MoveError::CellOccupied`] for a non-empty target square.
    ///
    /// On any rejection the board and move count are left untouched.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> Result<TurnReport, MoveError> {
        match self.phase {
            GamePhase::Terminal(_) => {
                warn!(row, col, "Move submitted after game over");
                return Err(MoveError::GameAlreadyOver);
            }
            GamePhase::AwaitingAutomated => {
                warn!(row, col, "Move submitted while automated side is due");
                return Err(MoveError::IllegalState);
            }
            GamePhase::AwaitingHuman => {}
        }

        let position = Position::new(row, col)?;
        if !self.board.is_empty(position) {
            warn!(%position, "Square already occupied");
            return Err(MoveError::CellOccupied(position));
        }

        let human_move = self.apply(Move::new(self.human, position));
        info!(%human_move, outcome = %self.outcome(), "Human move applied");

        if let GamePhase::Terminal(outcome) = self.phase {
            return Ok(TurnReport {
                human: human_move,
                automated: None,
                outcome,
            });
        }

        let automated_move = self.automated_turn()?;
        let outcome = rules::outcome(&self.board);
        Ok(TurnReport {
            human: human_move,
            automated: Some(automated_move),
            outcome,
        })
    }

    /// Runs the automated side's turn: selects a move, applies it, and
    /// advances the phase machine.
    fn automated_turn(&mut self) -> Result<Move, MoveError> {
        let position = self.selector.select(&mut self.board, self.automated)?;
        let automated_move = self.apply(Move::new(self.automated, position));
        info!(%automated_move, outcome = %self.outcome(), "Automated move applied");
        Ok(automated_move)
    }

    /// Applies a validated move and recomputes the phase.
    fn apply(&mut self, mov: Move) -> Move {
        self.board.set(mov.position, Square::Occupied(mov.player));
        self.history.push(mov);

        self.phase = match rules::outcome(&self.board) {
            Outcome::InProgress => {
                if mov.player == self.human {
                    GamePhase::AwaitingAutomated
                } else {
                    GamePhase::AwaitingHuman
                }
            }
            outcome => {
                debug!(%outcome, moves = self.history.len(), "Game reached terminal state");
                GamePhase::Terminal(outcome)
            }
        };
        mov
    }

    /// Returns the current outcome, derived from the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Returns all currently legal moves in row-major order.
    ///
    /// Empty once the session is terminal.
    pub fn legal_moves(&self) -> Vec<Position> {
        match self.phase {
            GamePhase::Terminal(_) => Vec::new(),
            _ => self.board.legal_moves(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human side's mark.
    pub fn human_mark(&self) -> Player {
        self.human
    }

    /// Returns the automated side's mark.
    pub fn automated_mark(&self) -> Player {
        self.automated
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the move history in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
