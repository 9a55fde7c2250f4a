//! Owned-state game engine for tic-tac-toe.
//!
//! The engine is the single owner of the game state. Callers send move
//! and reset events and receive snapshots back; they never hold a
//! mutable reference into the state.

use super::action::{MoveOutcome, MoveRejection};
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Coord;
use super::rules;
use super::types::{GameState, GameStatus};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Builds an engine by applying `moves` from the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[(usize, usize)]) -> Result<Self, MoveRejection> {
        let mut engine = Self::new();
        for &(row, col) in moves {
            engine.apply_move(row, col).into_result()?;
        }
        Ok(engine)
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned snapshot of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Returns the empty cells, or nothing once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Coord> {
        if self.state.is_over() {
            Vec::new()
        } else {
            Coord::empty_cells(self.state.board())
        }
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// Checks, in order: the game is still in progress, the coordinate
    /// is on the board, the cell is empty. A rejected move leaves the
    /// state untouched.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        match self.try_place(row, col) {
            Ok(()) => {
                debug!(status = ?self.state.status(), "Move accepted");
                MoveOutcome::Accepted(self.snapshot())
            }
            Err(reason) => {
                debug!(%reason, "Move rejected");
                MoveOutcome::Rejected {
                    reason,
                    state: self.snapshot(),
                }
            }
        }
    }

    /// Reinitializes to the empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        info!(previous = ?self.state.status(), "Resetting game");
        self.state = GameState::new();
        self.snapshot()
    }

    fn try_place(&mut self, row: usize, col: usize) -> Result<(), MoveRejection> {
        if self.state.is_over() {
            return Err(MoveRejection::GameOver);
        }

        let coord = Coord::new(row, col).ok_or(MoveRejection::OutOfRange { row, col })?;

        if !self.state.board().is_empty(coord) {
            return Err(MoveRejection::Occupied(coord));
        }

        self.state.place(coord);
        self.update_status();

        debug_assert!(
            GameInvariants::check_all(&self.state).is_ok(),
            "Game invariants violated after move at {coord}"
        );

        Ok(())
    }

    /// Runs terminal detection and passes the turn if the game goes on.
    fn update_status(&mut self) {
        let board = *self.state.board();
        if let Some((winner, line)) = rules::find_winning_line(&board) {
            info!(%winner, "Game won");
            self.state.finish(GameStatus::Won(winner), Some(line));
        } else if rules::is_full(&board) {
            info!("Game drawn");
            self.state.finish(GameStatus::Drawn, None);
        } else {
            self.state.pass_turn();
        }
    }
}
