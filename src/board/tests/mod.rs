//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Move legality, flipping and generation
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Negamax, iterative deepening and cancellation
//! - `proptest.rs` - Property-based tests

mod search;

use crate::board::Board;

/// Parse a diagram, panicking on malformed test input.
pub(super) fn board(diagram: &str) -> Board {
    diagram.parse().expect("valid diagram")
}

pub(super) fn mv(notation: &str) -> crate::board::Move {
    notation.parse().expect("valid square")
}
