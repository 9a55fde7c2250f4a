//! Starfield tic-tac-toe - a tic-tac-toe engine with a terminal front end
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe engine, rules and invariants
//! - **Starfield**: the decorative background animation
//! - **TUI**: the terminal front end drawing both
//! - **Script**: headless move lists with a JSON report
//!
//! # Example
//!
//! ```
//! use starfield_tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     engine.apply_move(row, col);
//! }
//! assert_eq!(engine.state().status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod script;
pub mod starfield;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, StarfieldConfig, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Coord, GameEngine, GameState, GameStatus, Move, MoveOutcome, MoveRejection,
    Player, WinningLine, invariants, rules,
};

// Crate-level exports - Scripts
pub use script::{MoveRecord, ScriptError, ScriptReport, parse_moves, run_moves, run_script};

// Crate-level exports - Starfield
pub use starfield::{PointerKind, Star, StarSprite, Starfield, Velocity};
