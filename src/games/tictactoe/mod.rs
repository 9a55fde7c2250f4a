//! Tic-tac-toe: board types, rules, invariants and the game engine.

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveOutcome, MoveRejection};
pub use engine::GameEngine;
pub use position::Coord;
pub use types::{Board, Cell, GameState, GameStatus, Player, WinningLine};
