//! Legal move enumeration.
//!
//! Every candidate goes through the rules engine's `is_legal`; the generator
//! never decides legality on its own. Output is in square-index order
//! (a1, b1, ..., h8) in both modes, which root tie-breaking relies on.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::position::Position;
use super::{Direction, Move, MoveList, Side};

/// How candidate squares are chosen before the legality check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveGenMode {
    /// Test all 64 squares.
    #[default]
    FullScan,
    /// Test only empty squares touching an opponent disc. A capture needs an
    /// opponent disc adjacent to the placed one, so no legal move is skipped.
    Frontier,
}

/// In-bounds neighbours of every square, indexed by `Move::index`.
static NEIGHBOURS: Lazy<Vec<Vec<Move>>> = Lazy::new(|| {
    (0..64u8)
        .map(|idx| {
            let from = Move::from_index(idx);
            Direction::ALL
                .iter()
                .filter_map(|dir| {
                    let (dx, dy) = dir.offset();
                    let x = u8::try_from(from.x() as i8 + dx).ok()?;
                    let y = u8::try_from(from.y() as i8 + dy).ok()?;
                    Move::new(x, y).ok()
                })
                .collect()
        })
        .collect()
});

/// All legal moves for `side`, scanning the whole board.
#[must_use]
pub fn generate_moves<P: Position>(pos: &P, side: Side) -> MoveList {
    generate_moves_with(pos, side, MoveGenMode::FullScan)
}

/// All legal moves for `side` using the given candidate strategy.
#[must_use]
pub fn generate_moves_with<P: Position>(pos: &P, side: Side, mode: MoveGenMode) -> MoveList {
    let mut moves = MoveList::new();
    for idx in 0..64u8 {
        let mv = Move::from_index(idx);
        if mode == MoveGenMode::Frontier && !is_frontier(pos, mv, side) {
            continue;
        }
        if pos.is_legal(mv, side) {
            moves.push(mv);
        }
    }
    moves
}

/// Number of legal moves for `side`.
#[must_use]
pub fn mobility<P: Position>(pos: &P, side: Side) -> u32 {
    generate_moves(pos, side).len() as u32
}

/// True if `side` has at least one legal move.
#[must_use]
pub fn has_moves<P: Position>(pos: &P, side: Side) -> bool {
    (0..64u8).any(|idx| pos.is_legal(Move::from_index(idx), side))
}

fn is_frontier<P: Position>(pos: &P, mv: Move, side: Side) -> bool {
    if pos.is_occupied(mv.x(), mv.y()) {
        return false;
    }
    let opponent = side.opponent();
    NEIGHBOURS[mv.index()]
        .iter()
        .any(|n| pos.occupied_by(n.x(), n.y(), opponent))
}
