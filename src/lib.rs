//! Tic-tac-toe game engine with an automated opponent.
//!
//! The crate exposes a plain data API that a presentation layer drives:
//! start a session, submit human moves, query legal moves and the outcome.
//! Rendering and input collection stay outside.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of squares, mutated in place by one owner
//! - **Rules**: win/draw detection over rows, columns, and both diagonals
//! - **Selector**: random or minimax move choice for the automated side
//! - **Session**: the turn state machine tying the pieces together
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{start_game, GameConfig, Outcome};
//!
//! let mut session = start_game(GameConfig::default());
//! let report = session.submit_human_move(0, 0)?;
//! assert_eq!(report.outcome, Outcome::InProgress);
//! // The automated reply has already been played.
//! assert!(report.automated.is_some());
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod position;
mod rules;
mod selector;
mod session;
mod types;

// Crate-level exports - actions and errors
pub use action::{Move, MoveError};

// Crate-level exports - coordinates
pub use position::{Position, BOARD_SIZE, SQUARE_COUNT};

// Crate-level exports - rules engine
pub use rules::{check_winner, is_full, outcome};

// Crate-level exports - move selection
pub use selector::{best_move, MoveSelector, StrategyKind};

// Crate-level exports - session management
pub use session::{start_game, GameConfig, GamePhase, GameSession, TurnReport};

// Crate-level exports - domain types
pub use types::{Board, Outcome, Player, Square};
