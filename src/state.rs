//! Game state snapshot and the active-board constraint.

use crate::action::Move;
use crate::position::Position;
use crate::types::{Outcome, Player, SubBoard};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Constraint on where the next move may be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveBoard {
    /// Any sub-board still in progress may be played.
    Any,
    /// The next move must target this sub-board.
    Board(Position),
}

/// Complete game state.
///
/// Owned by a [`crate::GameEngine`]; consumers only ever see clones,
/// so a snapshot can never mutate engine internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The nine sub-boards, meta-grid row-major.
    boards: [SubBoard; 9],
    /// Player holding the turn. After the game ends this stays on the
    /// winner so callers can display who won.
    current_player: Player,
    /// Where the next move is allowed.
    active_board: ActiveBoard,
    /// Outcome at the meta level.
    outcome: Outcome,
}

impl GameState {
    /// Creates the initial state: empty boards, X to move, unconstrained.
    pub fn new() -> Self {
        Self {
            boards: std::array::from_fn(|_| SubBoard::new()),
            current_player: Player::X,
            active_board: ActiveBoard::Any,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns all nine sub-boards.
    pub fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Returns the sub-board at the given meta-grid slot.
    pub fn board(&self, pos: Position) -> &SubBoard {
        &self.boards[pos.to_index()]
    }

    /// Returns the player holding the turn.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the active-board constraint.
    pub fn active_board(&self) -> ActiveBoard {
        self.active_board
    }

    /// Returns the meta-level outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is over.
    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Returns the overall winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Projects sub-board outcomes to the mark vector for the meta win test.
    ///
    /// A slot is claimed only by the player who won that sub-board;
    /// drawn and undecided boards project to `None`.
    pub fn meta_marks(&self) -> [Option<Player>; 9] {
        let mut marks = [None; 9];
        for (slot, board) in marks.iter_mut().zip(self.boards.iter()) {
            *slot = board.outcome().winner();
        }
        marks
    }

    /// Returns true when every sub-board has been decided.
    pub fn all_boards_decided(&self) -> bool {
        self.boards.iter().all(|b| b.is_decided())
    }

    /// Sub-boards a move may currently target.
    ///
    /// Empty once the game is over. When the active board is specific
    /// this is exactly that board; a specific-but-decided active board
    /// falls back to every board still in progress.
    #[instrument(skip(self))]
    pub fn playable_boards(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        if let ActiveBoard::Board(pos) = self.active_board {
            if !self.board(pos).is_decided() {
                return vec![pos];
            }
        }
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| !self.board(*pos).is_decided())
            .collect()
    }

    /// Every legal move in the current state.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Move> {
        self.playable_boards()
            .into_iter()
            .flat_map(|board| {
                Position::empty_cells(self.board(board))
                    .into_iter()
                    .map(move |cell| Move::new(board, cell))
            })
            .collect()
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.outcome {
            Outcome::InProgress => {
                format!("In progress. Player {:?} to move.", self.current_player)
            }
            Outcome::Won(player) => format!("Game over. Player {:?} wins!", player),
            Outcome::Draw => "Game over. Draw!".to_string(),
        }
    }

    /// Formats the full 9x9 grid as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for board_row in 0..3 {
            for cell_row in 0..3 {
                for board_col in 0..3 {
                    let board = &self.boards[board_row * 3 + board_col];
                    for cell_col in 0..3 {
                        result.push(board.cells()[cell_row * 3 + cell_col].symbol());
                    }
                    if board_col < 2 {
                        result.push_str(" | ");
                    }
                }
                result.push('\n');
            }
            if board_row < 2 {
                result.push_str("----+-----+----\n");
            }
        }
        result
    }

    /// Mutable access to a sub-board.
    pub(crate) fn board_mut(&mut self, pos: Position) -> &mut SubBoard {
        &mut self.boards[pos.to_index()]
    }

    /// Sets the meta-level outcome.
    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// Sets the active-board constraint.
    pub(crate) fn set_active_board(&mut self, active: ActiveBoard) {
        self.active_board = active;
    }

    /// Sets the player holding the turn.
    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
