//! The game engine: single owner of mutable state.
//!
//! One engine instance is one game. The engine is synchronous and not
//! internally synchronized; a concurrent host must serialize calls per
//! instance.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::rules;
use crate::state::{ActiveBoard, GameState};
use crate::types::{Cell, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Snapshot of the state after the move.
    pub state: GameState,
    /// Meta-level outcome after the move.
    pub status: Outcome,
}

impl MoveOutcome {
    /// Returns true if this move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.status.is_decided()
    }
}

/// Rules engine for ultimate tic-tac-toe.
///
/// Owns the [`GameState`] exclusively; callers receive clones, never
/// aliases. Exactly one of {state change, rejection} occurs per call
/// to [`apply_move`](GameEngine::apply_move).
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns a reference to the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned snapshot of the current state.
    ///
    /// Callable at any time, including after game end. Mutating the
    /// snapshot has no effect on the engine.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Discards the current game and starts a fresh one.
    ///
    /// Returns a snapshot of the initial state.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> GameState {
        self.state = GameState::new();
        self.snapshot()
    }

    /// Applies a move given raw grid indices.
    ///
    /// Indices outside 0-8 are rejected with `InvalidIndex`; all other
    /// legality checks follow in the fixed rejection order. See
    /// [`apply`](GameEngine::apply).
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, board: usize, cell: usize) -> Result<MoveOutcome, MoveError> {
        let action = Move::from_indices(board, cell)?;
        self.apply(action)
    }

    /// Applies a move on behalf of the player holding the turn.
    ///
    /// On acceptance: the mark is placed, the target sub-board and the
    /// meta board are re-evaluated, the next active-board constraint is
    /// derived from the played cell, and the turn passes unless the
    /// game ended. On rejection the state is untouched.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`MoveError`] precondition:
    /// `GameAlreadyOver`, `WrongBoard`, `BoardNotPlayable`, then
    /// `CellOccupied`.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn apply(&mut self, action: Move) -> Result<MoveOutcome, MoveError> {
        MoveContract::pre(&self.state, &action)?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let player = self.state.current_player();

        // Place the mark and re-evaluate the target sub-board.
        let board = self.state.board_mut(action.board);
        board.set(action.cell, Cell::Occupied(player));
        if let Some(winner) = rules::check_winner(&board.marks()) {
            board.set_outcome(Outcome::Won(winner));
        } else if rules::is_full(board) {
            board.set_outcome(Outcome::Draw);
        }

        // Re-evaluate the meta board over the won-board claims.
        if let Some(winner) = rules::check_winner(&self.state.meta_marks()) {
            self.state.set_outcome(Outcome::Won(winner));
        } else if self.state.all_boards_decided() {
            self.state.set_outcome(Outcome::Draw);
        }

        // The played cell selects the opponent's board; a decided
        // target releases the constraint entirely.
        let target = action.cell;
        let next_active = if self.state.board(target).is_decided() {
            ActiveBoard::Any
        } else {
            ActiveBoard::Board(target)
        };
        self.state.set_active_board(next_active);

        // The winner keeps the turn so callers can display who won.
        if self.state.outcome() == Outcome::InProgress {
            self.state.set_current_player(player.opponent());
        }

        #[cfg(debug_assertions)]
        if let Err(violation) = MoveContract::post(&before, &self.state) {
            warn!(error = %violation, "Postcondition failed, rolling back");
            self.state = before;
            return Err(violation);
        }

        let status = self.state.outcome();
        debug!(%action, ?status, "Move accepted");

        Ok(MoveOutcome {
            state: self.state.clone(),
            status,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, SubBoard};
    use crate::Position;

    // Full board with no line: X O X / O X X / O X O (5 X, 4 O).
    const DRAWN_X_HEAVY: [Player; 9] = [
        Player::X,
        Player::O,
        Player::X,
        Player::O,
        Player::X,
        Player::X,
        Player::O,
        Player::X,
        Player::O,
    ];

    // Mirror pattern (4 X, 5 O), also line-free.
    const DRAWN_O_HEAVY: [Player; 9] = [
        Player::O,
        Player::X,
        Player::O,
        Player::X,
        Player::O,
        Player::O,
        Player::X,
        Player::O,
        Player::X,
    ];

    fn fill_drawn(board: &mut SubBoard, pattern: [Player; 9]) {
        for (index, player) in pattern.into_iter().enumerate() {
            board.set(Position::from_index(index).unwrap(), Cell::Occupied(player));
        }
        board.set_outcome(Outcome::Draw);
    }

    fn fill_won(board: &mut SubBoard, winner: Player) {
        // Winner takes the top row, loser blocks two middle cells so
        // the mark counts stay balanced across paired boards.
        let loser = winner.opponent();
        for index in 0..3 {
            board.set(Position::from_index(index).unwrap(), Cell::Occupied(winner));
        }
        board.set(Position::MiddleLeft, Cell::Occupied(loser));
        board.set(Position::Center, Cell::Occupied(loser));
        board.set_outcome(Outcome::Won(winner));
    }

    /// Builds a state where only board 8 is undecided, one cell short
    /// of a draw, with no meta line available to either player.
    fn one_move_from_meta_draw() -> GameEngine {
        let mut engine = GameEngine::new();

        fill_won(engine.state.board_mut(Position::TopLeft), Player::X);
        fill_won(engine.state.board_mut(Position::TopCenter), Player::O);
        for pos in [Position::TopRight, Position::Center, Position::BottomLeft] {
            fill_drawn(engine.state.board_mut(pos), DRAWN_X_HEAVY);
        }
        for pos in [
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
        ] {
            fill_drawn(engine.state.board_mut(pos), DRAWN_O_HEAVY);
        }

        // Board 8 follows the X-heavy drawn pattern minus cell 5.
        let board = engine.state.board_mut(Position::BottomRight);
        for (index, player) in DRAWN_X_HEAVY.into_iter().enumerate() {
            if index != 5 {
                board.set(Position::from_index(index).unwrap(), Cell::Occupied(player));
            }
        }

        engine
            .state
            .set_active_board(ActiveBoard::Board(Position::BottomRight));
        engine
    }

    #[test]
    fn test_meta_draw_on_final_move() {
        let mut engine = one_move_from_meta_draw();

        let outcome = engine.apply_move(8, 5).expect("legal final move");
        assert_eq!(outcome.status, Outcome::Draw);
        assert!(outcome.is_terminal());
        assert_eq!(engine.state().outcome(), Outcome::Draw);
        assert!(engine.state().all_boards_decided());
        // The drawn target releases the constraint, though no move can
        // follow anyway.
        assert_eq!(engine.state().active_board(), ActiveBoard::Any);
    }

    #[test]
    fn test_no_moves_listed_after_meta_draw() {
        let mut engine = one_move_from_meta_draw();
        engine.apply_move(8, 5).expect("legal final move");

        assert!(engine.state().playable_boards().is_empty());
        assert!(engine.state().valid_moves().is_empty());
        assert_eq!(
            engine.apply_move(8, 5),
            Err(MoveError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_new_game_resets_state() {
        let mut engine = GameEngine::new();
        engine.apply_move(4, 4).expect("legal move");
        assert_ne!(engine.state(), &GameState::new());

        let fresh = engine.new_game();
        assert_eq!(fresh, GameState::new());
        assert_eq!(engine.state(), &fresh);
    }
}
