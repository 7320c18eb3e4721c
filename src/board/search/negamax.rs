//! Core search implementation.
//!
//! This module implements:
//! - Fail-hard negamax with alpha-beta pruning (or full-width when disabled)
//! - Root search that scores every root move and ranks them
//! - Iterative deepening under a cooperative deadline (see `iterative`)
//!
//! Every frame clones its position before applying a move; the caller's
//! position is never mutated.

mod iterative;

pub use iterative::search;

use log::trace;

use super::constants::SCORE_INFINITY;
use super::{IterationResult, RootMove, SearchParams};
use crate::board::eval::Evaluator;
use crate::board::movegen::generate_moves_with;
use crate::board::position::Position;
use crate::board::{Move, Side};
use crate::sync::CancelToken;

/// Search context for a single search
pub struct SearchContext<'a, E: Evaluator> {
    pub evaluator: &'a E,
    pub params: &'a SearchParams,
    pub token: &'a CancelToken,
    /// Nodes visited over the context's lifetime
    pub nodes: u64,
}

impl<'a, E: Evaluator> SearchContext<'a, E> {
    #[must_use]
    pub fn new(evaluator: &'a E, params: &'a SearchParams, token: &'a CancelToken) -> Self {
        SearchContext {
            evaluator,
            params,
            token,
            nodes: 0,
        }
    }

    /// Score `pos` for `side` searching `depth` plies inside `(alpha, beta)`.
    ///
    /// Returns 0 once the token trips; callers must check
    /// `token.is_cancelled()` before trusting the value.
    pub fn negamax<P: Position>(
        &mut self,
        pos: &P,
        side: Side,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        if self.token.poll() {
            return 0;
        }
        self.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(pos, side);
        }
        let moves = generate_moves_with(pos, side, self.params.movegen);
        if moves.is_empty() {
            return self.evaluator.evaluate(pos, side);
        }

        let mut best = -SCORE_INFINITY;
        for &mv in &moves {
            let mut child = pos.clone();
            let applied = child.apply(Some(mv), side);
            debug_assert!(applied.is_ok(), "rules engine rejected generated move {mv}");
            if applied.is_err() {
                continue;
            }
            let score = -self.negamax(&child, side.opponent(), depth - 1, -beta, -alpha);
            if self.token.is_cancelled() {
                return 0;
            }

            if self.params.pruning {
                if score >= beta {
                    return beta;
                }
                if score > alpha {
                    alpha = score;
                }
            } else if score > best {
                best = score;
            }
        }

        if self.params.pruning {
            alpha
        } else {
            best
        }
    }

    /// One fixed-depth pass over `root_moves` in the given order.
    ///
    /// Every root move is searched with the full window, so each ranking
    /// entry is an exact score and not a bound. Ties go to the earlier move.
    pub fn search_root<P: Position>(
        &mut self,
        pos: &P,
        side: Side,
        depth: u32,
        root_moves: &[Move],
    ) -> IterationResult {
        let depth = depth.max(1);
        let start_nodes = self.nodes;
        let mut best: Option<RootMove> = None;
        let mut ranking = Vec::with_capacity(root_moves.len());

        for &mv in root_moves {
            if self.token.poll() {
                return IterationResult {
                    depth,
                    best,
                    ranking,
                    completed: false,
                    nodes: self.nodes - start_nodes,
                };
            }

            let mut child = pos.clone();
            let applied = child.apply(Some(mv), side);
            debug_assert!(applied.is_ok(), "rules engine rejected root move {mv}");
            if applied.is_err() {
                continue;
            }
            let score = -self.negamax(
                &child,
                side.opponent(),
                depth - 1,
                -SCORE_INFINITY,
                SCORE_INFINITY,
            );
            if self.token.is_cancelled() {
                return IterationResult {
                    depth,
                    best,
                    ranking,
                    completed: false,
                    nodes: self.nodes - start_nodes,
                };
            }

            trace!("depth {depth} root {mv} score {score}");
            ranking.push(RootMove { mv, score });
            if best.map_or(true, |b| score > b.score) {
                best = Some(RootMove { mv, score });
            }
        }

        IterationResult {
            depth,
            best,
            ranking,
            completed: true,
            nodes: self.nodes - start_nodes,
        }
    }
}

/// Run a single fixed-depth pass with no deadline.
#[must_use]
pub fn search_depth<P: Position, E: Evaluator>(
    pos: &P,
    side: Side,
    evaluator: &E,
    params: &SearchParams,
    depth: u32,
    root_moves: &[Move],
) -> IterationResult {
    let token = CancelToken::unbounded();
    let mut ctx = SearchContext::new(evaluator, params, &token);
    ctx.search_root(pos, side, depth, root_moves)
}
