//! Error types for board operations.

use std::fmt;

use super::{Move, Side};

/// Error type for rejected disc placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the 8x8 grid
    OutOfBounds { x: u8, y: u8 },
    /// Square is occupied or the placement flips nothing
    Illegal { mv: Move, side: Side },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { x, y } => {
                write!(f, "Square ({x}, {y}) is off the board (must be 0-7)")
            }
            MoveError::Illegal { mv, side } => {
                write!(f, "Illegal move {mv} for {side}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Notation must be exactly two characters (e.g. `d3`)
    InvalidLength { len: usize },
    /// Column or row character out of range
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 2 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for board diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Diagram must have exactly 8 non-blank rows
    WrongRowCount { found: usize },
    /// Each row must have exactly 8 cells
    WrongRowLength { row: usize, found: usize },
    /// Unknown cell character
    InvalidCell { row: usize, char: char },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::WrongRowCount { found } => {
                write!(f, "Board diagram needs 8 rows, found {found}")
            }
            BoardParseError::WrongRowLength { row, found } => {
                write!(f, "Row {row} needs 8 cells, found {found}")
            }
            BoardParseError::InvalidCell { row, char } => {
                write!(f, "Invalid cell character '{char}' in row {row}")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}
