//! Completed tours and their replay verification.

use std::fmt;

use crate::board::{Board, MoveTable, Square, TourError, MAX_SQUARES};

/// Ordered squares of a tour, stored inline without heap allocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tour {
    squares: [Square; MAX_SQUARES],
    len: u8,
}

impl Tour {
    /// Build a tour from a square sequence of at most 64 entries.
    pub fn from_squares(squares: &[Square]) -> Option<Self> {
        if squares.len() > MAX_SQUARES {
            return None;
        }
        let mut tour = Tour {
            squares: [Square(0); MAX_SQUARES],
            len: squares.len() as u8,
        };
        tour.squares[..squares.len()].copy_from_slice(squares);
        Some(tour)
    }

    pub(crate) fn from_iter_exact(squares: impl Iterator<Item = Square>) -> Self {
        let mut tour = Tour {
            squares: [Square(0); MAX_SQUARES],
            len: 0,
        };
        for (slot, sq) in tour.squares.iter_mut().zip(squares) {
            *slot = sq;
            tour.len += 1;
        }
        tour
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> Square {
        self.squares[0]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    /// Replay the tour on a fresh board and report the first failed check.
    pub fn verify(&self, start: Square, table: &MoveTable) -> Result<(), TourError> {
        let squares = self.as_slice();
        if squares.len() != table.squares() {
            return Err(TourError::WrongLength {
                found: squares.len(),
                expected: table.squares(),
            });
        }
        if squares[0] != start {
            return Err(TourError::StartMismatch {
                expected: start,
                found: squares[0],
            });
        }

        let mut board = Board::new();
        board.mark(start);
        let mut prev = start;
        for (step, &sq) in squares.iter().enumerate().skip(1) {
            if board.test(sq) {
                return Err(TourError::Revisited { square: sq, step });
            }
            if !table.moves(prev).contains(sq) {
                return Err(TourError::IllegalStep {
                    from: prev,
                    to: sq,
                    step,
                });
            }
            board.mark(sq);
            prev = sq;
        }

        if !table.moves(prev).contains(start) {
            return Err(TourError::NotClosed { last: prev, start });
        }
        Ok(())
    }

    /// True if the tour is a legal closed tour covering every square from `start`.
    #[must_use]
    pub fn is_valid(&self, start: Square, table: &MoveTable) -> bool {
        self.verify(start, table).is_ok()
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|sq| sq.0)).finish()
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
