//! Mark balance invariant: X and O counts stay within one move of each other.

use super::Invariant;
use crate::state::GameState;
use crate::types::{Cell, Outcome, Player};

/// Invariant: marks across all 81 cells balance with the turn order.
///
/// X moves first, so the X count either equals the O count (X to move)
/// or exceeds it by one (O to move). While the game is in progress the
/// turn holder pins down which of the two; after the game ends either
/// balance is acceptable since the winner keeps the turn for display.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    fn counts(state: &GameState) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for board in state.boards() {
            for cell in board.cells() {
                match cell {
                    Cell::Occupied(Player::X) => x_count += 1,
                    Cell::Occupied(Player::O) => o_count += 1,
                    Cell::Empty => {}
                }
            }
        }
        (x_count, o_count)
    }
}

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let (x_count, o_count) = Self::counts(state);

        match state.outcome() {
            Outcome::InProgress => match state.current_player() {
                Player::X => x_count == o_count,
                Player::O => x_count == o_count + 1,
            },
            _ => x_count == o_count || x_count == o_count + 1,
        }
    }

    fn description() -> &'static str {
        "X and O mark counts balance with the turn order"
    }
}
