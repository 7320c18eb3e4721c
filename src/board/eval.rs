//! Static evaluation.
//!
//! Scores are from the perspective of the side passed in: higher is better
//! for that side. Both evaluators are pure functions of (position, side).

use super::eval_terms::{self, EvalParams};
use super::movegen::mobility;
use super::position::Position;
use super::Side;

/// A static scoring function the search can be parameterised over.
pub trait Evaluator {
    fn evaluate<P: Position>(&self, pos: &P, side: Side) -> i32;
}

/// Phase-aware weighted combination of positional terms.
#[derive(Clone, Debug, Default)]
pub struct WeightedEvaluator {
    params: EvalParams,
}

impl WeightedEvaluator {
    #[must_use]
    pub fn new(params: EvalParams) -> Self {
        WeightedEvaluator { params }
    }

    #[must_use]
    pub fn params(&self) -> &EvalParams {
        &self.params
    }
}

impl Evaluator for WeightedEvaluator {
    fn evaluate<P: Position>(&self, pos: &P, side: Side) -> i32 {
        let disc = eval_terms::disc_differential(pos, side);

        let own_moves = mobility(pos, side);
        let opp_moves = mobility(pos, side.opponent());
        if own_moves + opp_moves <= self.params.degenerate_mobility {
            return disc;
        }

        let w = self.params.weights_for(pos.total_discs());
        let mut score = w.disc * disc
            + w.corner * eval_terms::corner_control(pos, side)
            + w.edge * eval_terms::edge_control(pos, side)
            + w.near_corner * eval_terms::near_corner(pos, side);
        if w.mobility != 0 {
            score += w.mobility * eval_terms::mobility_differential(own_moves, opp_moves);
        }
        score / 100
    }
}

/// Raw disc count difference.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscCountEvaluator;

impl Evaluator for DiscCountEvaluator {
    fn evaluate<P: Position>(&self, pos: &P, side: Side) -> i32 {
        pos.count(side) as i32 - pos.count(side.opponent()) as i32
    }
}
