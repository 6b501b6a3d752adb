//! Core domain types for ultimate tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Single-character symbol for display ('.' when empty).
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// Status of a board, at either the sub-board or the meta level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Board is still being contested.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Full with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns true once the board can no longer accept moves.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the board ended in a draw.
    pub fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {:?} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One of the nine 3x3 sub-boards.
///
/// Carries its own outcome alongside the raw cells. Once the outcome
/// is decided the engine never mutates the cells again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBoard {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    /// Status of this sub-board.
    outcome: Outcome,
}

impl SubBoard {
    /// Creates a new empty sub-board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
            outcome: Outcome::InProgress,
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns this sub-board's outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once this sub-board can no longer accept moves.
    pub fn is_decided(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Projects the cells to the mark vector consumed by the win test.
    pub fn marks(&self) -> [Option<Player>; 9] {
        let mut marks = [None; 9];
        for (slot, cell) in marks.iter_mut().zip(self.cells.iter()) {
            if let Cell::Occupied(player) = cell {
                *slot = Some(*player);
            }
        }
        marks
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Sets this sub-board's outcome.
    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}
