//! Outcome consistency invariant: status and winning line agree with the board.

use super::super::rules::{LINES, find_winning_line, is_full, line_owner};
use super::super::{GameState, GameStatus};
use super::Invariant;

/// Invariant: the status is the one the board implies.
///
/// - `Won(p)`: a winning line is present, is one of the eight lines, and
///   every cell on it holds `p`.
/// - `Drawn`: no line is present, the board is full and no line is complete.
/// - `InProgress`: no line is present and no line is complete.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match (state.status(), state.winning_line()) {
            (GameStatus::Won(winner), Some(line)) => {
                LINES.contains(line) && line_owner(board, line) == Some(winner)
            }
            (GameStatus::Drawn, None) => is_full(board) && find_winning_line(board).is_none(),
            (GameStatus::InProgress, None) => find_winning_line(board).is_none(),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Status and winning line agree with the board"
    }
}
