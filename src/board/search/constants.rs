//! Search constants.

/// Bound outside any reachable evaluation. Evaluations stay within a few
/// hundred either way, so negating this never overflows.
pub const SCORE_INFINITY: i32 = 30_000;

/// Hard ceiling on iterative deepening: one ply per initially empty square.
pub const MAX_DEPTH: u32 = 60;

/// Iteration whose root ranking reorders the moves for deeper passes.
pub const DEFAULT_ORDERING_DEPTH: u32 = 2;
