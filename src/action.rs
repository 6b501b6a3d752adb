//! First-class action types for ultimate tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A move: a mark placed in one cell of one sub-board.
///
/// The acting player is not part of the move; the engine always plays
/// on behalf of whoever holds the turn, so a stale caller cannot move
/// out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The sub-board being played (meta-grid slot).
    pub board: Position,
    /// The cell inside that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Position, cell: Position) -> Self {
        Self { board, cell }
    }

    /// Builds a move from raw indices, rejecting anything outside 0-8.
    pub fn from_indices(board: usize, cell: usize) -> Result<Self, MoveError> {
        let board = Position::from_index(board).ok_or(MoveError::InvalidIndex(board))?;
        let cell = Position::from_index(cell).ok_or(MoveError::InvalidIndex(cell))?;
        Ok(Self { board, cell })
    }

    /// Returns the targeted sub-board.
    pub fn board(&self) -> Position {
        self.board
    }

    /// Returns the targeted cell.
    pub fn cell(&self) -> Position {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in board {}", self.cell.label(), self.board.label())
    }
}

/// Reason a move was rejected.
///
/// Every variant is a recoverable outcome of normal play (stale UI
/// state, double clicks); rejection never mutates engine state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already been decided.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The move must be played in the active board.
    #[display("Move must be played in board {}", _0)]
    WrongBoard(Position),

    /// The targeted sub-board is already decided.
    #[display("Board {} is already decided", _0)]
    BoardNotPlayable(Position),

    /// The targeted cell is already occupied.
    #[display("Cell {} of board {} is already occupied", _1, _0)]
    CellOccupied(Position, Position),

    /// An index was outside the 0-8 grid range.
    #[display("Index {} is out of range (0-8)", _0)]
    InvalidIndex(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
