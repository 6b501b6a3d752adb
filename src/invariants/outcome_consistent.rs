//! Outcome consistency invariant: stored outcomes match recomputation.

use super::Invariant;
use crate::rules;
use crate::state::GameState;
use crate::types::{Outcome, SubBoard};

/// Invariant: every stored outcome equals what the pure rules recompute.
///
/// Sub-board outcomes must follow from the raw cells, and the meta
/// outcome must follow from the sub-board outcomes. This rules out
/// derived-state drift: no board is marked won without a line, drawn
/// without being full, or left in progress after being decided.
pub struct OutcomeConsistentInvariant;

impl OutcomeConsistentInvariant {
    fn expected(board: &SubBoard) -> Outcome {
        if let Some(winner) = rules::check_winner(&board.marks()) {
            Outcome::Won(winner)
        } else if rules::is_full(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    fn expected_meta(state: &GameState) -> Outcome {
        if let Some(winner) = rules::check_winner(&state.meta_marks()) {
            Outcome::Won(winner)
        } else if state.all_boards_decided() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .boards()
            .iter()
            .all(|board| board.outcome() == Self::expected(board))
            && state.outcome() == Self::expected_meta(state)
    }

    fn description() -> &'static str {
        "Stored outcomes match recomputation from raw cells"
    }
}
