//! Core domain types for tic-tac-toe.

use super::action::Move;
use super::position::Coord;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board, addressed row-major.
///
/// The board is `Copy`, so every snapshot owns its own rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Sets the cell at the given coordinate.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Iterates over every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL.iter().map(|&coord| (coord, self.get(coord)))
    }

    /// Counts the cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => (row * 3 + col + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row for this player.
    Won(Player),
    /// Board filled with no three in a row.
    Drawn,
}

/// The three coordinates of a completed row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Coord; 3]);

impl WinningLine {
    pub(crate) const fn new(coords: [Coord; 3]) -> Self {
        Self(coords)
    }

    /// Returns the coordinates of the line.
    pub fn coords(&self) -> &[Coord; 3] {
        &self.0
    }

    /// Checks if the line passes through `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
}

/// Immutable snapshot of a game, handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    history: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is next.
    ///
    /// Once the game is won this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning line, present only when the game is won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Status line for display.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Next player: {}", self.current_player),
            GameStatus::Won(player) => format!("{} wins", player),
            GameStatus::Drawn => "Draw".to_string(),
        }
    }

    /// Places the current player's mark and records the move.
    pub(super) fn place(&mut self, coord: Coord) {
        let player = self.current_player;
        self.board.set(coord, Cell::Occupied(player));
        self.history.push(Move::new(player, coord));
    }

    /// Passes the turn to the opponent.
    pub(super) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Ends the game with the given status and line.
    pub(super) fn finish(&mut self, status: GameStatus, line: Option<WinningLine>) {
        self.status = status;
        self.winning_line = line;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.iter().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_board_copy_is_independent() {
        let mut board = Board::new();
        let snapshot = board;
        board.set(Coord::CENTER, Cell::Occupied(Player::X));
        assert!(snapshot.is_empty(Coord::CENTER));
        assert!(!board.is_empty(Coord::CENTER));
    }

    #[test]
    fn test_display_marks_and_numbers() {
        let mut board = Board::new();
        board.set(Coord::TOP_LEFT, Cell::Occupied(Player::X));
        board.set(Coord::CENTER, Cell::Occupied(Player::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_text() {
        let mut state = GameState::new();
        assert_eq!(state.status_text(), "Next player: X");
        state.finish(GameStatus::Won(Player::O), None);
        assert_eq!(state.status_text(), "O wins");
        state.finish(GameStatus::Drawn, None);
        assert_eq!(state.status_text(), "Draw");
    }
}
