//! Board coordinates for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A validated (row, col) coordinate on the 3x3 board.
///
/// Rows and columns are indexed 0-2. Values outside that range can
/// only be represented as raw `usize` pairs, which the engine rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Top-left (0, 0)
    pub const TOP_LEFT: Coord = Coord::at(0, 0);
    /// Top-center (0, 1)
    pub const TOP_CENTER: Coord = Coord::at(0, 1);
    /// Top-right (0, 2)
    pub const TOP_RIGHT: Coord = Coord::at(0, 2);
    /// Middle-left (1, 0)
    pub const MIDDLE_LEFT: Coord = Coord::at(1, 0);
    /// Center (1, 1)
    pub const CENTER: Coord = Coord::at(1, 1);
    /// Middle-right (1, 2)
    pub const MIDDLE_RIGHT: Coord = Coord::at(1, 2);
    /// Bottom-left (2, 0)
    pub const BOTTOM_LEFT: Coord = Coord::at(2, 0);
    /// Bottom-center (2, 1)
    pub const BOTTOM_CENTER: Coord = Coord::at(2, 1);
    /// Bottom-right (2, 2)
    pub const BOTTOM_RIGHT: Coord = Coord::at(2, 2);

    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::TOP_LEFT,
        Coord::TOP_CENTER,
        Coord::TOP_RIGHT,
        Coord::MIDDLE_LEFT,
        Coord::CENTER,
        Coord::MIDDLE_RIGHT,
        Coord::BOTTOM_LEFT,
        Coord::BOTTOM_CENTER,
        Coord::BOTTOM_RIGHT,
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, or `None` if either index is outside 0-2.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a coordinate from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this coordinate (for display).
    pub fn label(&self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.to_index()]
    }

    /// Parses a 1-based keypad number ("1" top-left through "9" bottom-right).
    #[instrument]
    pub fn from_keypad(s: &str) -> Option<Coord> {
        match s.trim().parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => Self::from_index(n - 1),
            _ => None,
        }
    }

    /// Filters coordinates by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Coord> {
        Self::ALL
            .iter()
            .copied()
            .filter(|coord| board.is_empty(*coord))
            .collect()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
