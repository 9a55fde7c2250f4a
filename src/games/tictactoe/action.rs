//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A move attempt either
//! produces a new snapshot or a rejection that says why.

use super::{Coord, GameState, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An accepted move: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who made the move.
    pub player: Player,
    /// Where the mark was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord.label())
    }
}

/// Why a move attempt was refused.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum MoveRejection {
    /// Row or column outside 0-2.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Coord),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of a move attempt.
///
/// Both arms carry a snapshot, so the renderer can redraw either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was applied.
    Accepted(GameState),
    /// The move was refused; `state` is the unchanged snapshot.
    Rejected {
        /// Why the move was refused.
        reason: MoveRejection,
        /// The state, exactly as before the attempt.
        state: GameState,
    },
}

impl MoveOutcome {
    /// Returns the snapshot after the attempt.
    pub fn state(&self) -> &GameState {
        match self {
            MoveOutcome::Accepted(state) => state,
            MoveOutcome::Rejected { state, .. } => state,
        }
    }

    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// Converts into a `Result`, dropping the unchanged snapshot on rejection.
    pub fn into_result(self) -> Result<GameState, MoveRejection> {
        match self {
            MoveOutcome::Accepted(state) => Ok(state),
            MoveOutcome::Rejected { reason, .. } => Err(reason),
        }
    }
}
