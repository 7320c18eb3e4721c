use super::position::Position;
use super::{Bitboard, Direction, Move, MoveError, Side};

/// Bitboard implementation of the 8x8 rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) discs: [Bitboard; 2], // [black, white]
}

impl Board {
    /// Standard starting position: white on d4/e5, black on d5/e4.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.set(Move::from_index(27), Some(Side::White)); // d4
        board.set(Move::from_index(36), Some(Side::White)); // e5
        board.set(Move::from_index(35), Some(Side::Black)); // d5
        board.set(Move::from_index(28), Some(Side::Black)); // e4
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            discs: [Bitboard::EMPTY; 2],
        }
    }

    /// Overwrite one square. Used for building test and puzzle positions.
    pub fn set(&mut self, sq: Move, disc: Option<Side>) {
        let bit = Bitboard::from_move(sq);
        for slot in &mut self.discs {
            *slot = slot.and(bit.not());
        }
        if let Some(side) = disc {
            self.discs[side.index()] = self.discs[side.index()].or(bit);
        }
    }

    /// Disc on a square, if any
    #[must_use]
    pub fn disc_at(&self, sq: Move) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|side| self.discs[side.index()].contains(sq))
    }

    #[inline]
    #[must_use]
    pub fn discs(&self, side: Side) -> Bitboard {
        self.discs[side.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.discs[0].or(self.discs[1])
    }

    /// Discs that `side` would flip by playing `sq`; empty if the move is illegal.
    #[must_use]
    pub fn flips(&self, sq: Move, side: Side) -> Bitboard {
        let placed = Bitboard::from_move(sq);
        if !self.occupied().and(placed).is_empty() {
            return Bitboard::EMPTY;
        }
        let own = self.discs(side);
        let opp = self.discs(side.opponent());

        let mut flipped = Bitboard::EMPTY;
        for dir in Direction::ALL {
            let mut run = Bitboard::EMPTY;
            let mut cursor = placed.shift(dir);
            while !cursor.and(opp).is_empty() {
                run = run.or(cursor);
                cursor = cursor.shift(dir);
            }
            if !cursor.and(own).is_empty() {
                flipped = flipped.or(run);
            }
        }
        flipped
    }

    /// True when neither side has a legal move.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        Side::BOTH.into_iter().all(|side| {
            self.occupied()
                .not()
                .iter()
                .all(|sq| self.flips(sq, side).is_empty())
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Position for Board {
    #[inline]
    fn is_legal(&self, mv: Move, side: Side) -> bool {
        !self.flips(mv, side).is_empty()
    }

    fn apply(&mut self, mv: Option<Move>, side: Side) -> Result<u32, MoveError> {
        let Some(mv) = mv else {
            return Ok(0);
        };
        let flipped = self.flips(mv, side);
        if flipped.is_empty() {
            return Err(MoveError::Illegal { mv, side });
        }
        let own = side.index();
        let opp = side.opponent().index();
        self.discs[own] = self.discs[own].or(flipped).or(Bitboard::from_move(mv));
        self.discs[opp] = self.discs[opp].and(flipped.not());
        Ok(flipped.popcount())
    }

    #[inline]
    fn count(&self, side: Side) -> u32 {
        self.discs(side).popcount()
    }

    #[inline]
    fn occupied_by(&self, x: u8, y: u8, side: Side) -> bool {
        Move::new(x, y).is_ok_and(|sq| self.discs(side).contains(sq))
    }
}
