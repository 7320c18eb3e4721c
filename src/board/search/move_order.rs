//! Root move ordering between iterations.
//!
//! The ranking from a shallow pass reorders the root list for deeper passes.

use std::cmp::Reverse;

use super::RootMove;
use crate::board::Move;

/// Reorder `moves` best-first by their ranked score.
///
/// The sort is stable: equal scores keep their current relative order, and
/// moves missing from `ranking` go last in their current order.
#[must_use]
pub fn order_root_moves(moves: &[Move], ranking: &[RootMove]) -> Vec<Move> {
    let mut keyed: Vec<(Move, Option<i32>)> = moves
        .iter()
        .map(|&mv| (mv, ranking.iter().find(|r| r.mv == mv).map(|r| r.score)))
        .collect();
    keyed.sort_by_key(|&(_, score)| Reverse(score));
    keyed.into_iter().map(|(mv, _)| mv).collect()
}
