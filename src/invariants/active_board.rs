//! Active-board invariant: the constraint never points at a dead board.

use super::Invariant;
use crate::state::{ActiveBoard, GameState};
use crate::types::Outcome;

/// Invariant: a specific active board is always still in progress.
///
/// The engine falls back to `Any` whenever a move would send the
/// opponent into a decided board, so a specific constraint must always
/// be playable while the game runs. Once the game is over the
/// constraint is irrelevant and unchecked.
pub struct ActiveBoardPlayableInvariant;

impl Invariant<GameState> for ActiveBoardPlayableInvariant {
    fn holds(state: &GameState) -> bool {
        if state.outcome() != Outcome::InProgress {
            return true;
        }
        match state.active_board() {
            ActiveBoard::Any => true,
            ActiveBoard::Board(pos) => !state.board(pos).is_decided(),
        }
    }

    fn description() -> &'static str {
        "A specific active board is still in progress"
    }
}
