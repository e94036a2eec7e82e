use super::{Bitboard, Square};

/// Squares visited on the path currently being explored.
///
/// One instance per search attempt, owned by the worker running it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    visited: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    #[inline(always)]
    #[must_use]
    pub fn test(&self, sq: Square) -> bool {
        self.visited.contains(sq)
    }

    #[inline(always)]
    pub fn mark(&mut self, sq: Square) {
        self.visited.0 |= sq.bit();
    }

    #[inline(always)]
    pub fn unmark(&mut self, sq: Square) {
        self.visited.0 &= !sq.bit();
    }

    #[inline(always)]
    #[must_use]
    pub fn bitboard(&self) -> Bitboard {
        self.visited
    }
}
