//! Ultimate tic-tac-toe rules engine.
//!
//! Nine standard tic-tac-toe boards arranged in a 3x3 meta-grid. The
//! cell chosen in one sub-board constrains which sub-board the
//! opponent must play next; winning a sub-board claims its meta-grid
//! slot, and three claimed slots in a line win the game.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the state and exposes the single
//!   mutating operation, [`GameEngine::apply_move`]
//! - **Rules**: pure predicates ([`check_winner`], [`is_full`]) shared
//!   by the sub-board and meta levels
//! - **Contracts**: precondition/postcondition validation around the
//!   state transition
//! - **Invariants**: composable properties checked after every
//!   accepted move in debug builds
//!
//! The engine performs no I/O and holds no global state; a rendering
//! layer feeds it `(board, cell)` requests and redraws from the
//! returned snapshot.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{ActiveBoard, GameEngine, MoveError, Outcome, Position};
//!
//! let mut engine = GameEngine::new();
//!
//! // X plays the center cell of the center board.
//! let outcome = engine.apply_move(4, 4).expect("legal move");
//! assert_eq!(outcome.status, Outcome::InProgress);
//!
//! // O is now constrained to the center board.
//! assert_eq!(
//!     engine.state().active_board(),
//!     ActiveBoard::Board(Position::Center)
//! );
//! assert_eq!(engine.apply_move(0, 0), Err(MoveError::WrongBoard(Position::Center)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
mod rules;
mod state;
mod types;

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Contracts
pub use contracts::{
    BoardPlayable, CellEmpty, Contract, GameNotOver, InActiveBoard, LegalMove, MoveContract,
};

// Crate-level exports - Engine
pub use engine::{GameEngine, MoveOutcome};

// Crate-level exports - Invariants
pub use invariants::{
    ActiveBoardPlayableInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, OutcomeConsistentInvariant, UltimateInvariants,
};

// Crate-level exports - Rules
pub use rules::{check_winner, is_draw, is_full};

// Crate-level exports - State
pub use state::{ActiveBoard, GameState};

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Cell, Outcome, Player, SubBoard};
