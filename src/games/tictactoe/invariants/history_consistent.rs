//! History consistency invariant: history matches the marks on the board.

use super::super::{Cell, Coord, GameState};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every mark on the board comes from exactly one recorded move.
///
/// History length equals the number of occupied cells, no coordinate
/// appears twice, and each recorded move's cell holds that mover's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let history = state.history();

        let occupied = board.iter().filter(|(_, cell)| *cell != Cell::Empty).count();
        if history.len() != occupied {
            return false;
        }

        let distinct: HashSet<Coord> = history.iter().map(|mv| mv.coord).collect();
        distinct.len() == history.len()
            && history
                .iter()
                .all(|mv| board.get(mv.coord) == Cell::Occupied(mv.player))
    }

    fn description() -> &'static str {
        "History matches the marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameEngine, Player};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let engine = GameEngine::replay(&[(0, 0), (1, 1), (0, 2), (2, 0)]).unwrap();
        assert!(HistoryConsistentInvariant::holds(engine.state()));
        assert_eq!(engine.state().history().len(), 4);
    }

    #[test]
    fn test_mark_without_move_violates() {
        let mut state = GameEngine::replay(&[(1, 1)]).unwrap().snapshot();
        state.board_mut().set(Coord::TOP_LEFT, Cell::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut state = GameEngine::replay(&[(1, 1)]).unwrap().snapshot();
        state.board_mut().set(Coord::CENTER, Cell::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
