//! Error types for board and tour operations.

use std::fmt;

use super::Square;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square name
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for unsupported board dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Board is empty, wider than the file letters, or larger than a bitboard
    UnsupportedSize { width: usize, height: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::UnsupportedSize { width, height } => {
                write!(f, "Unsupported board size {width}x{height} (1 to 64 squares, at most 26 files)")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Reason a tour failed replay verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// Tour does not cover every square exactly once by length
    WrongLength { found: usize, expected: usize },
    /// First square is not the claimed start
    StartMismatch { expected: Square, found: Square },
    /// Square stepped onto twice
    Revisited { square: Square, step: usize },
    /// Step is not a knight move
    IllegalStep { from: Square, to: Square, step: usize },
    /// Last square cannot reach the start in one knight move
    NotClosed { last: Square, start: Square },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourError::WrongLength { found, expected } => {
                write!(f, "Tour has {found} squares, expected {expected}")
            }
            TourError::StartMismatch { expected, found } => {
                write!(f, "Tour starts at {} instead of {}", found.0, expected.0)
            }
            TourError::Revisited { square, step } => {
                write!(f, "Square {} revisited at step {step}", square.0)
            }
            TourError::IllegalStep { from, to, step } => {
                write!(f, "Step {step} from {} to {} is not a knight move", from.0, to.0)
            }
            TourError::NotClosed { last, start } => {
                write!(f, "Last square {} does not reach start {}", last.0, start.0)
            }
        }
    }
}

impl std::error::Error for TourError {}
