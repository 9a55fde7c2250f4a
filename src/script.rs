//! Headless move scripts: apply a move list and report the outcome.

use crate::games::tictactoe::{GameEngine, GameState, MoveOutcome, MoveRejection};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move list could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Malformed move {:?} at position {}: expected ROW,COL", token, index)]
pub struct ScriptError {
    /// The offending token.
    pub token: String,
    /// Zero-based position of the token in the list.
    pub index: usize,
}

/// What happened to one scripted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Why the move was refused, or `None` if it was applied.
    pub rejection: Option<MoveRejection>,
}

/// Result of running a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptReport {
    /// One record per scripted move, in order.
    pub moves: Vec<MoveRecord>,
    /// Status line of the final state.
    pub status: String,
    /// The final snapshot.
    pub state: GameState,
}

/// Parses `"ROW,COL ROW,COL ..."`; whitespace or `;` separate moves.
///
/// Coordinates are not range-checked here; the engine rejects them.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<(usize, usize)>, ScriptError> {
    input
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            let malformed = || ScriptError {
                token: token.to_string(),
                index,
            };
            let (row, col) = token.split_once(',').ok_or_else(malformed)?;
            let row = row.trim().parse().map_err(|_| malformed())?;
            let col = col.trim().parse().map_err(|_| malformed())?;
            Ok((row, col))
        })
        .collect()
}

/// Applies every move to a fresh engine. Rejected moves are recorded
/// and the script carries on.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn run_moves(moves: &[(usize, usize)]) -> ScriptReport {
    let mut engine = GameEngine::new();
    let records = moves
        .iter()
        .map(|&(row, col)| {
            let rejection = match engine.apply_move(row, col) {
                MoveOutcome::Accepted(_) => None,
                MoveOutcome::Rejected { reason, .. } => Some(reason),
            };
            debug!(row, col, ?rejection, "Scripted move");
            MoveRecord { row, col, rejection }
        })
        .collect();

    let state = engine.snapshot();
    debug!(board = %state.board().display(), "Final board");
    ScriptReport {
        moves: records,
        status: state.status_text(),
        state,
    }
}

/// Parses and runs a move list.
pub fn run_script(input: &str) -> Result<ScriptReport, ScriptError> {
    parse_moves(input).map(|moves| run_moves(&moves))
}
