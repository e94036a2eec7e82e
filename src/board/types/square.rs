//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::geometry::Geometry;
use crate::board::error::SquareError;

/// A square on the board, identified by its bit position.
///
/// Squares are enumerated file-major from the highest file letter:
/// on the standard board index 0 is `H1`, 7 is `A1`, 8 is `H2` and 63 is `A8`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Single-bit mask for this square
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// Column counted from the highest file letter (0 = `H` on the standard board)
    #[inline]
    #[must_use]
    pub const fn column(self, geometry: Geometry) -> usize {
        self.index() % geometry.width()
    }

    /// Row (0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self, geometry: Geometry) -> usize {
        self.index() / geometry.width()
    }

    /// Name of the square on the given geometry (e.g. `H1`).
    #[must_use]
    pub fn name(self, geometry: Geometry) -> SquareName {
        SquareName {
            square: self,
            geometry,
        }
    }

    /// All squares of a geometry in index order
    pub fn all(geometry: Geometry) -> impl Iterator<Item = Square> {
        (0..geometry.squares()).map(|i| Square(i as u8))
    }

    /// Parse a square name on the given geometry.
    ///
    /// Letters are case-insensitive; the rank may have more than one digit.
    pub fn parse(s: &str, geometry: Geometry) -> Result<Self, SquareError> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }
        let file = (letter as u8 - b'A') as usize;
        if file >= geometry.width() {
            return Err(invalid());
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let rank: usize = digits.parse().map_err(|_| invalid())?;
        if rank == 0 || rank > geometry.height() {
            return Err(invalid());
        }

        let column = geometry.width() - 1 - file;
        Ok(Square((column + (rank - 1) * geometry.width()) as u8))
    }
}

/// Display adapter produced by [`Square::name`]
#[derive(Clone, Copy, Debug)]
pub struct SquareName {
    square: Square,
    geometry: Geometry,
}

impl fmt::Display for SquareName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = self.square.column(self.geometry);
        let letter = (b'A' + (self.geometry.width() - 1 - column) as u8) as char;
        write!(f, "{}{}", letter, self.square.row(self.geometry) + 1)
    }
}

// Standard-board naming
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name(Geometry::STANDARD), f)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s, Geometry::STANDARD)
    }
}
