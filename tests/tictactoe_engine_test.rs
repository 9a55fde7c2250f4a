//! Scenario tests for the tic-tac-toe engine.

use starfield_tictactoe::{
    Cell, Coord, GameEngine, GameState, GameStatus, MoveOutcome, MoveRejection, Player,
};

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        assert!(
            engine.apply_move(row, col).is_accepted(),
            "move ({row}, {col}) should be accepted"
        );
    }
}

fn assert_initial(state: &GameState) {
    assert!(state.board().iter().all(|(_, cell)| cell == Cell::Empty));
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert!(state.winning_line().is_none());
    assert!(state.history().is_empty());
}

const TOP_ROW_WIN: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];

const DRAW: [(usize, usize); 9] = [
    (0, 0), // X
    (0, 2), // O
    (0, 1), // X
    (1, 0), // O
    (1, 2), // X
    (1, 1), // O
    (2, 0), // X
    (2, 1), // O
    (2, 2), // X
];

#[test]
fn test_new_engine_is_initial() {
    assert_initial(GameEngine::new().state());
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &TOP_ROW_WIN);

    let state = engine.state();
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    let line = state.winning_line().expect("won game has a line");
    assert_eq!(
        line.coords(),
        &[Coord::TOP_LEFT, Coord::TOP_CENTER, Coord::TOP_RIGHT]
    );
    assert_eq!(state.status_text(), "X wins");
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut engine = GameEngine::new();
    play(&mut engine, &DRAW);

    let state = engine.state();
    assert_eq!(state.status(), GameStatus::Drawn);
    assert!(state.winning_line().is_none());
    assert!(state.board().iter().all(|(_, cell)| cell != Cell::Empty));
    assert_eq!(state.status_text(), "Draw");
}

#[test]
fn test_out_of_range_move_rejected() {
    let mut engine = GameEngine::new();
    let before = engine.snapshot();

    let outcome = engine.apply_move(5, 0);
    assert_eq!(
        outcome,
        MoveOutcome::Rejected {
            reason: MoveRejection::OutOfRange { row: 5, col: 0 },
            state: before.clone(),
        }
    );
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.state().status(), GameStatus::InProgress);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0)]);

    let outcome = engine.apply_move(0, 0);
    assert_eq!(outcome.rejection(), Some(MoveRejection::Occupied(Coord::TOP_LEFT)));

    let state = outcome.state();
    assert_eq!(state.board().get(Coord::TOP_LEFT), Cell::Occupied(Player::X));
    assert_eq!(state.current_player(), Player::O);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_move_after_win_rejected() {
    let mut engine = GameEngine::new();
    play(&mut engine, &TOP_ROW_WIN);
    let before = engine.snapshot();

    let outcome = engine.apply_move(2, 2);
    assert_eq!(outcome.rejection(), Some(MoveRejection::GameOver));
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.state().status(), GameStatus::Won(Player::X));
}

#[test]
fn test_move_after_draw_rejected() {
    let mut engine = GameEngine::new();
    play(&mut engine, &DRAW);
    assert_eq!(engine.apply_move(0, 0).rejection(), Some(MoveRejection::GameOver));
}

#[test]
fn test_reset_after_every_scenario() {
    let scenarios: [&[(usize, usize)]; 4] = [&TOP_ROW_WIN, &DRAW, &[(0, 0)], &[]];
    for moves in scenarios {
        let mut engine = GameEngine::new();
        for &(row, col) in moves {
            engine.apply_move(row, col);
        }
        engine.apply_move(5, 0);
        engine.apply_move(0, 0);

        let reset = engine.reset();
        assert_initial(&reset);
        assert_initial(engine.state());
    }
}

#[test]
fn test_reset_then_x_moves_first() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(1, 1)]);
    engine.reset();

    let state = engine.apply_move(1, 1).into_result().expect("accepted");
    assert_eq!(state.board().get(Coord::CENTER), Cell::Occupied(Player::X));
}

#[test]
fn test_replay_matches_manual_play() {
    let mut engine = GameEngine::new();
    play(&mut engine, &DRAW);
    let replayed = GameEngine::replay(&DRAW).expect("valid replay");
    assert_eq!(replayed.state(), engine.state());
}

#[test]
fn test_snapshots_are_independent_of_later_moves() {
    let mut engine = GameEngine::new();
    let first = engine.apply_move(0, 0).into_result().expect("accepted");
    engine.apply_move(1, 1);
    assert!(first.board().is_empty(Coord::CENTER));
    assert_eq!(first.history().len(), 1);
}
