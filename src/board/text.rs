//! Plain-text board diagrams.
//!
//! One line per row, row 8 first, `X` for black, `O` for white and `.` for
//! an empty square. Whitespace inside a row is ignored so diagrams can be
//! spaced out for readability.

use std::fmt;
use std::str::FromStr;

use super::error::BoardParseError;
use super::{Board, Move, Side};

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != 8 {
            return Err(BoardParseError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (i, line) in rows.iter().enumerate() {
            let y = 7 - i as u8;
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(BoardParseError::WrongRowLength {
                    row: usize::from(y) + 1,
                    found: cells.len(),
                });
            }
            for (x, c) in cells.into_iter().enumerate() {
                let disc = match c {
                    '.' | '-' => None,
                    other => Some(Side::from_char(other).ok_or(BoardParseError::InvalidCell {
                        row: usize::from(y) + 1,
                        char: other,
                    })?),
                };
                board.set(Move::from_index(x as u8 + 8 * y), disc);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8u8).rev() {
            for x in 0..8u8 {
                let c = self
                    .disc_at(Move::from_index(x + 8 * y))
                    .map_or('.', Side::to_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
