pub mod board;
pub mod engine;
pub mod sync;

pub use board::{Board, Move, Position, Side};
pub use engine::{TimeBudget, TurnController};
