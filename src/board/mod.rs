//! Board representation, rules, evaluation and search.
//!
//! The search core (`movegen`, `eval`, `search`) is generic over the
//! [`Position`] trait; [`Board`] is the bitboard rules engine that
//! implements it.
//!
//! # Example
//! ```
//! use reversi_engine::board::{generate_moves, Board, Side};
//!
//! let board = Board::new();
//! let moves = generate_moves(&board, Side::Black);
//! println!("Black has {} opening moves", moves.len());
//! ```

mod error;
mod eval;
mod eval_terms;
mod movegen;
mod position;
pub mod search;
mod state;
mod text;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{BoardParseError, MoveError, MoveParseError};
pub use position::Position;
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Direction, Move, MoveList, MoveListIntoIter, Side};

// Public API - move generation and evaluation
pub use eval::{DiscCountEvaluator, Evaluator, WeightedEvaluator};
pub use eval_terms::{EvalParams, EvalWeights};
pub use movegen::{generate_moves, generate_moves_with, has_moves, mobility, MoveGenMode};

// Public API - search functions and configuration
pub use search::{
    order_root_moves, search, search_depth, IterationResult, RootMove, SearchConfig,
    SearchInfoCallback, SearchIterationInfo, SearchParams, SearchResult,
};
