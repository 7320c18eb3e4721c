//! Bitboard type and operations.
//!
//! Bit `x + 8 * y` is the square at column `x`, row `y`; bit 0 is a1.

use super::moves::Move;

/// A 64-bit set of squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    /// a1, h1, a8, h8
    pub const CORNERS: Bitboard = Bitboard(0x8100000000000081);
    /// The middle four squares of each edge (c..f on ranks 1/8, 3..6 on files a/h)
    pub const EDGES: Bitboard = Bitboard(0x3C0081818181003C);
    /// Squares diagonally adjacent to a corner (b2, g2, b7, g7)
    pub const X_SQUARES: Bitboard = Bitboard(0x0042000000004200);
    /// Squares orthogonally adjacent to a corner (b1, g1, a2, h2, a7, h7, b8, g8)
    pub const C_SQUARES: Bitboard = Bitboard(0x4281000000008142);
}

/// The eight compass directions a capturing run can follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Coordinate offset `(dx, dy)` of one step in this direction
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_move(mv: Move) -> Self {
        Bitboard(1u64 << mv.index())
    }

    /// Returns an iterator over the squares set in this bitboard, lowest index first
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, mv: Move) -> bool {
        (self.0 & (1u64 << mv.index())) != 0
    }

    /// Shift every square one step in `dir`, dropping squares that would
    /// leave the board or wrap onto the opposite file.
    #[inline]
    #[must_use]
    pub const fn shift(self, dir: Direction) -> Self {
        let bits = self.0;
        Bitboard(match dir {
            Direction::North => bits << 8,
            Direction::South => bits >> 8,
            Direction::East => (bits << 1) & !Self::FILE_A.0,
            Direction::West => (bits >> 1) & !Self::FILE_H.0,
            Direction::NorthEast => (bits << 9) & !Self::FILE_A.0,
            Direction::NorthWest => (bits << 7) & !Self::FILE_H.0,
            Direction::SouthEast => (bits >> 7) & !Self::FILE_A.0,
            Direction::SouthWest => (bits >> 9) & !Self::FILE_H.0,
        })
    }

    /// Bitwise AND
    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    /// Bitwise OR
    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard(self.0 | other.0)
    }

    /// Bitwise NOT
    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Move {
    let idx = bb.0.trailing_zeros() as u8;
    bb.0 &= bb.0 - 1;
    Move::from_index(idx)
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }
}
