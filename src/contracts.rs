//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, UltimateInvariants};
use crate::state::{ActiveBoard, GameState};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The game must not be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with `GameAlreadyOver` once the meta outcome is decided.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The move must respect the active-board constraint.
///
/// A specific active board forces the move there, unless that board is
/// itself decided - a move must never be forced into a board that
/// cannot accept moves, so any other board becomes fair game.
pub struct InActiveBoard;

impl InActiveBoard {
    /// Rejects with `WrongBoard` when the constraint is violated.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if let ActiveBoard::Board(required) = state.active_board() {
            if mov.board != required && !state.board(required).is_decided() {
                return Err(MoveError::WrongBoard(required));
            }
        }
        Ok(())
    }
}

/// Precondition: The targeted sub-board must still be in progress.
pub struct BoardPlayable;

impl BoardPlayable {
    /// Rejects with `BoardNotPlayable` when the target is decided.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board(mov.board).is_decided() {
            Err(MoveError::BoardNotPlayable(mov.board))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The targeted cell must be empty.
pub struct CellEmpty;

impl CellEmpty {
    /// Rejects with `CellOccupied` when the cell holds a mark.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if !state.board(mov.board).is_empty(mov.cell) {
            Err(MoveError::CellOccupied(mov.board, mov.cell))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: full legality check, in rejection order.
///
/// Game over is reported before a wrong board, a wrong board before a
/// dead board, a dead board before an occupied cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        InActiveBoard::check(mov, state)?;
        BoardPlayable::check(mov, state)?;
        CellEmpty::check(mov, state)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: the composite [`LegalMove`] check.
/// Postconditions: the full invariant set still holds.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        UltimateInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
