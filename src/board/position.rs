//! The rules-engine interface the search core is written against.

use super::{Move, MoveError, Side};

/// Game state as seen by the move generator, evaluator and search.
///
/// `Clone` must produce a fully independent copy: search frames clone a
/// position before applying a hypothetical move and never share clones
/// between siblings.
pub trait Position: Clone {
    /// True if `side` may place a disc at `mv`.
    fn is_legal(&self, mv: Move, side: Side) -> bool;

    /// Play `mv` for `side`, returning the number of flipped discs.
    ///
    /// `None` is a pass and leaves the position unchanged. An illegal move
    /// is rejected and leaves the position unchanged.
    fn apply(&mut self, mv: Option<Move>, side: Side) -> Result<u32, MoveError>;

    /// Number of discs owned by `side`.
    fn count(&self, side: Side) -> u32;

    /// True if the square at column `x`, row `y` holds a disc of `side`.
    fn occupied_by(&self, x: u8, y: u8, side: Side) -> bool;

    /// Total discs on the board.
    fn total_discs(&self) -> u32 {
        self.count(Side::Black) + self.count(Side::White)
    }

    /// Squares not yet played.
    fn empties(&self) -> u32 {
        64 - self.total_discs()
    }

    /// True if the square holds a disc of either side.
    fn is_occupied(&self, x: u8, y: u8) -> bool {
        self.occupied_by(x, y, Side::Black) || self.occupied_by(x, y, Side::White)
    }
}
