//! Draw detection for sub-boards.

use crate::types::{Cell, SubBoard};
use tracing::instrument;

/// Checks if a sub-board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &SubBoard) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks if a sub-board is drawn: full with no completed line.
#[instrument]
pub fn is_draw(board: &SubBoard) -> bool {
    is_full(board) && super::check_winner(&board.marks()).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    fn fill(board: &mut SubBoard, pattern: [Player; 9]) {
        for (index, player) in pattern.into_iter().enumerate() {
            let pos = Position::from_index(index).unwrap();
            board.set(pos, Cell::Occupied(player));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = SubBoard::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = SubBoard::new();
        board.set(Position::Center, Cell::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        let mut board = SubBoard::new();
        // X O X / O X X / O X O
        fill(&mut board, [X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        let mut board = SubBoard::new();
        // X wins the top row on a full board.
        fill(&mut board, [X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
