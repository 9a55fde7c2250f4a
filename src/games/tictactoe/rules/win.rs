//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Coord, Player, WinningLine};
use tracing::instrument;

/// Every line that wins, in detection priority order: rows top to
/// bottom, columns left to right, main diagonal, anti-diagonal.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Coord::TOP_LEFT, Coord::TOP_CENTER, Coord::TOP_RIGHT]),
    WinningLine::new([Coord::MIDDLE_LEFT, Coord::CENTER, Coord::MIDDLE_RIGHT]),
    WinningLine::new([Coord::BOTTOM_LEFT, Coord::BOTTOM_CENTER, Coord::BOTTOM_RIGHT]),
    // Columns
    WinningLine::new([Coord::TOP_LEFT, Coord::MIDDLE_LEFT, Coord::BOTTOM_LEFT]),
    WinningLine::new([Coord::TOP_CENTER, Coord::CENTER, Coord::BOTTOM_CENTER]),
    WinningLine::new([Coord::TOP_RIGHT, Coord::MIDDLE_RIGHT, Coord::BOTTOM_RIGHT]),
    // Diagonals
    WinningLine::new([Coord::TOP_LEFT, Coord::CENTER, Coord::BOTTOM_RIGHT]),
    WinningLine::new([Coord::TOP_RIGHT, Coord::CENTER, Coord::BOTTOM_LEFT]),
];

/// Returns the holder of `line` if all three cells share one mark.
pub fn line_owner(board: &Board, line: &WinningLine) -> Option<Player> {
    let [a, b, c] = *line.coords();
    let cell = board.get(a);
    if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
        cell.player()
    } else {
        None
    }
}

/// Finds the first completed line in priority order.
///
/// Returns the winner and the line, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    LINES
        .iter()
        .find_map(|line| line_owner(board, line).map(|player| (player, *line)))
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Coord, Player)]) -> Board {
        let mut board = Board::new();
        for &(coord, player) in marks {
            board.set(coord, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Coord::TOP_LEFT, Player::X),
            (Coord::TOP_CENTER, Player::X),
            (Coord::TOP_RIGHT, Player::X),
        ]);
        assert_eq!(find_winning_line(&board), Some((Player::X, LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Coord::TOP_RIGHT, Player::O),
            (Coord::CENTER, Player::O),
            (Coord::BOTTOM_LEFT, Player::O),
        ]);
        assert_eq!(find_winning_line(&board), Some((Player::O, LINES[7])));
    }

    #[test]
    fn test_rows_take_priority_over_columns_and_diagonals() {
        // Top row, left column and main diagonal all complete.
        let board = board_with(&[
            (Coord::TOP_LEFT, Player::X),
            (Coord::TOP_CENTER, Player::X),
            (Coord::TOP_RIGHT, Player::X),
            (Coord::MIDDLE_LEFT, Player::X),
            (Coord::BOTTOM_LEFT, Player::X),
            (Coord::CENTER, Player::X),
            (Coord::BOTTOM_RIGHT, Player::X),
        ]);
        assert_eq!(find_winning_line(&board), Some((Player::X, LINES[0])));
    }

    #[test]
    fn test_columns_take_priority_over_diagonals() {
        let board = board_with(&[
            (Coord::TOP_CENTER, Player::O),
            (Coord::CENTER, Player::O),
            (Coord::BOTTOM_CENTER, Player::O),
            (Coord::TOP_LEFT, Player::O),
            (Coord::BOTTOM_RIGHT, Player::O),
        ]);
        assert_eq!(find_winning_line(&board), Some((Player::O, LINES[4])));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Coord::TOP_LEFT, Player::X),
            (Coord::TOP_CENTER, Player::O),
            (Coord::TOP_RIGHT, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }
}
