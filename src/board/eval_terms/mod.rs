//! Evaluation terms.
//!
//! Each term scores a position for one side on a [-100, 100] scale and is
//! antisymmetric: swapping the side negates it exactly.

mod weights;

pub use weights::{EvalParams, EvalWeights};

use crate::board::position::Position;
use crate::board::{Bitboard, Side};

/// Weight of an owned X-square relative to an owned C-square
const X_SQUARE_WEIGHT: i32 = 4;
const C_SQUARE_WEIGHT: i32 = 1;

/// `100 * (own - opp) / (own + opp)`, zero when both are zero.
#[inline]
#[must_use]
pub fn ratio(own: u32, opp: u32) -> i32 {
    let total = own + opp;
    if total == 0 {
        return 0;
    }
    100 * (own as i32 - opp as i32) / total as i32
}

fn owned_in<P: Position>(pos: &P, mask: Bitboard, side: Side) -> i32 {
    mask.iter()
        .filter(|sq| pos.occupied_by(sq.x(), sq.y(), side))
        .count() as i32
}

/// Disc differential relative to discs on the board.
#[must_use]
pub fn disc_differential<P: Position>(pos: &P, side: Side) -> i32 {
    ratio(pos.count(side), pos.count(side.opponent()))
}

/// Mobility differential from precomputed legal-move counts.
#[must_use]
pub fn mobility_differential(own_moves: u32, opp_moves: u32) -> i32 {
    ratio(own_moves, opp_moves)
}

/// Net corners held, 25 points each.
#[must_use]
pub fn corner_control<P: Position>(pos: &P, side: Side) -> i32 {
    let net = owned_in(pos, Bitboard::CORNERS, side)
        - owned_in(pos, Bitboard::CORNERS, side.opponent());
    net * 100 / Bitboard::CORNERS.popcount() as i32
}

/// Net non-corner edge squares held.
#[must_use]
pub fn edge_control<P: Position>(pos: &P, side: Side) -> i32 {
    let net =
        owned_in(pos, Bitboard::EDGES, side) - owned_in(pos, Bitboard::EDGES, side.opponent());
    net * 100 / Bitboard::EDGES.popcount() as i32
}

/// Penalty for holding squares next to corners, reward for the opponent holding them.
#[must_use]
pub fn near_corner<P: Position>(pos: &P, side: Side) -> i32 {
    let exposure = |s: Side| {
        X_SQUARE_WEIGHT * owned_in(pos, Bitboard::X_SQUARES, s)
            + C_SQUARE_WEIGHT * owned_in(pos, Bitboard::C_SQUARES, s)
    };
    let max = X_SQUARE_WEIGHT * Bitboard::X_SQUARES.popcount() as i32
        + C_SQUARE_WEIGHT * Bitboard::C_SQUARES.popcount() as i32;
    (exposure(side.opponent()) - exposure(side)) * 100 / max
}
