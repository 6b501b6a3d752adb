//! Win detection shared by the sub-board and meta-board levels.

use crate::position::Position;
use crate::types::Player;
use tracing::instrument;

/// Checks if a 9-slot mark vector contains a completed line.
///
/// Returns `Some(player)` if the player holds three slots in a row,
/// `None` otherwise. Sub-boards feed their cell marks; the meta level
/// feeds the vector of won-board claims (drawn and undecided boards
/// project to `None`, so they never count toward a line).
#[instrument]
pub fn check_winner(marks: &[Option<Player>; 9]) -> Option<Player> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for [a, b, c] in LINES {
        if let Some(player) = marks[a.to_index()] {
            if marks[b.to_index()] == Some(player) && marks[c.to_index()] == Some(player) {
                return Some(player);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks_at(player: Player, slots: &[usize]) -> [Option<Player>; 9] {
        let mut marks = [None; 9];
        for &slot in slots {
            marks[slot] = Some(player);
        }
        marks
    }

    #[test]
    fn test_no_winner_empty_marks() {
        assert_eq!(check_winner(&[None; 9]), None);
    }

    #[test]
    fn test_winner_top_row() {
        let marks = marks_at(Player::X, &[0, 1, 2]);
        assert_eq!(check_winner(&marks), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let marks = marks_at(Player::O, &[0, 4, 8]);
        assert_eq!(check_winner(&marks), Some(Player::O));
    }

    #[test]
    fn test_winner_column() {
        let marks = marks_at(Player::X, &[2, 5, 8]);
        assert_eq!(check_winner(&marks), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let marks = marks_at(Player::X, &[0, 1]);
        assert_eq!(check_winner(&marks), None);
    }

    #[test]
    fn test_mixed_marks_no_line() {
        let mut marks = marks_at(Player::X, &[0, 4]);
        marks[8] = Some(Player::O);
        assert_eq!(check_winner(&marks), None);
    }
}
