//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, GameStatus, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show an X, O, X, O, ... pattern starting with X,
/// and the player to move must follow from the history. A won game keeps
/// the winner as the current player.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        // Mark counts can differ by at most one, X ahead.
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        if x != o && x != o + 1 {
            return false;
        }

        match (state.status(), history.last()) {
            (GameStatus::Won(winner), Some(last)) => {
                last.player == winner && state.current_player() == winner
            }
            (GameStatus::Won(_), None) => false,
            (GameStatus::InProgress, last) => {
                let expected = last.map_or(Player::X, |mv| mv.player.opponent());
                state.current_player() == expected
            }
            (GameStatus::Drawn, _) => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
