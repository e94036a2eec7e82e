//! Board dimensions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::GeometryError;

/// Maximum number of squares a bitboard can represent.
pub const MAX_SQUARES: usize = 64;

/// Files are named `A` to `Z`.
pub const MAX_WIDTH: usize = 26;

/// Width and height of a rectangular board.
///
/// The tour search always runs on [`Geometry::STANDARD`]; smaller boards
/// exist so the exhaustive search can be checked against known tour counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    width: u8,
    height: u8,
}

impl Geometry {
    pub const STANDARD: Geometry = Geometry {
        width: 8,
        height: 8,
    };

    /// Create a geometry, rejecting empty boards, boards over 64 squares and
    /// boards with more files than letters
    pub fn new(width: usize, height: usize) -> Result<Self, GeometryError> {
        let squares = width.saturating_mul(height);
        if squares == 0 || squares > MAX_SQUARES || width > MAX_WIDTH {
            return Err(GeometryError::UnsupportedSize { width, height });
        }
        Ok(Geometry {
            width: width as u8,
            height: height as u8,
        })
    }

    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        self.width as usize
    }

    #[inline]
    #[must_use]
    pub const fn height(self) -> usize {
        self.height as usize
    }

    #[inline]
    #[must_use]
    pub const fn squares(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_bounds() {
        assert_eq!(Geometry::STANDARD.squares(), 64);
        assert_eq!(Geometry::new(5, 6).unwrap().squares(), 30);
        assert!(Geometry::new(0, 8).is_err());
        assert!(Geometry::new(9, 8).is_err());
        assert!(Geometry::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_width_limited_to_file_letters() {
        assert!(Geometry::new(26, 2).is_ok());
        assert!(Geometry::new(27, 2).is_err());
        assert!(Geometry::new(64, 1).is_err());
        assert!(Geometry::new(1, 64).is_ok());
    }
}
