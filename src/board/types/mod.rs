//! Core game types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Side` - the two players
//! - `Move` and `MoveList` - disc placements
//! - `Bitboard` - 64-bit board representation

mod bitboard;
mod moves;
mod side;

pub use bitboard::{Bitboard, BitboardIter, Direction};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use side::Side;
