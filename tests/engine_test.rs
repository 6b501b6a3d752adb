//! Tests for the engine's move legality and constraint propagation.

use ultimate_tictactoe::{
    ActiveBoard, GameEngine, GameState, MoveError, Outcome, Player, Position,
};

#[test]
fn test_initial_state() {
    let engine = GameEngine::new();
    let state = engine.state();

    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.active_board(), ActiveBoard::Any);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert!(!state.is_over());
    assert!(state.boards().iter().all(|b| !b.is_decided()));
    assert_eq!(state.playable_boards().len(), 9);
    assert_eq!(state.valid_moves().len(), 81);
}

#[test]
fn test_first_move_constrains_opponent() {
    // Scenario A: fresh game, center of center board.
    let mut engine = GameEngine::new();

    let outcome = engine.apply_move(4, 4).expect("legal move");
    assert_eq!(outcome.status, Outcome::InProgress);
    assert!(!outcome.is_terminal());

    let state = engine.state();
    assert_eq!(state.active_board(), ActiveBoard::Board(Position::Center));
    assert_eq!(state.current_player(), Player::O);
    assert_eq!(state.playable_boards(), vec![Position::Center]);
    assert_eq!(state.valid_moves().len(), 8);
}

#[test]
fn test_wrong_board_rejected() {
    // Scenario B: active board is 4, move targets board 0.
    let mut engine = GameEngine::new();
    engine.apply_move(4, 4).expect("legal move");

    let result = engine.apply_move(0, 0);
    assert_eq!(result, Err(MoveError::WrongBoard(Position::Center)));

    // The turn was not consumed.
    assert_eq!(engine.state().current_player(), Player::O);
}

#[test]
fn test_invalid_index_rejected() {
    let mut engine = GameEngine::new();
    let before = engine.snapshot();

    assert_eq!(engine.apply_move(9, 0), Err(MoveError::InvalidIndex(9)));
    assert_eq!(engine.apply_move(0, 42), Err(MoveError::InvalidIndex(42)));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    // Scenario E: replaying into the same cell changes nothing.
    let mut engine = GameEngine::new();
    engine.apply_move(4, 4).expect("legal move");
    let before = engine.snapshot();

    let result = engine.apply_move(4, 4);
    assert_eq!(
        result,
        Err(MoveError::CellOccupied(Position::Center, Position::Center))
    );
    assert_eq!(engine.state(), &before);

    // Rejection is idempotent.
    for _ in 0..3 {
        assert!(engine.apply_move(4, 4).is_err());
        assert_eq!(engine.state(), &before);
    }
}

/// X takes the top row of board 0. Every O reply plays cell 0, which
/// sends X straight back to board 0.
fn win_board_zero(engine: &mut GameEngine) {
    for (board, cell) in [(0, 1), (1, 0), (0, 2), (2, 0), (0, 0)] {
        engine.apply_move(board, cell).expect("legal move");
    }
}

#[test]
fn test_won_board_rejects_further_moves() {
    // Scenario C.
    let mut engine = GameEngine::new();
    win_board_zero(&mut engine);

    let board = engine.state().board(Position::TopLeft);
    assert_eq!(board.outcome(), Outcome::Won(Player::X));

    let result = engine.apply_move(0, 3);
    assert_eq!(result, Err(MoveError::BoardNotPlayable(Position::TopLeft)));
}

#[test]
fn test_decided_target_releases_constraint() {
    // X's winning move lands on cell 0, which points back at the board
    // it just decided; the opponent may play anywhere still open.
    let mut engine = GameEngine::new();
    win_board_zero(&mut engine);

    assert_eq!(engine.state().active_board(), ActiveBoard::Any);
    assert_eq!(engine.state().current_player(), Player::O);
    assert_eq!(engine.state().playable_boards().len(), 8);

    engine.apply_move(7, 7).expect("any open board is legal");
}

#[test]
fn test_sub_board_win_does_not_end_game() {
    let mut engine = GameEngine::new();
    win_board_zero(&mut engine);

    assert_eq!(engine.state().outcome(), Outcome::InProgress);
    assert!(!engine.state().is_over());
    assert_eq!(engine.state().winner(), None);
}

#[test]
fn test_snapshot_is_detached() {
    let mut engine = GameEngine::new();
    let snapshot = engine.snapshot();

    engine.apply_move(4, 4).expect("legal move");

    // The earlier snapshot still shows the initial state.
    assert_eq!(snapshot, GameState::new());
    assert_ne!(&snapshot, engine.state());
}

#[test]
fn test_status_string_tracks_turn() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.state().status_string(),
        "In progress. Player X to move."
    );

    engine.apply_move(4, 4).expect("legal move");
    assert_eq!(
        engine.state().status_string(),
        "In progress. Player O to move."
    );
}

#[test]
fn test_display_renders_marks() {
    let mut engine = GameEngine::new();
    engine.apply_move(4, 4).expect("legal move");

    let grid = engine.state().display();
    assert!(grid.contains('X'));
    // 9 cell rows plus 2 dividers.
    assert_eq!(grid.lines().count(), 11);
}
