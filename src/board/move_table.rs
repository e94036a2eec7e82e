//! Precomputed knight-move tables.
//!
//! `moves(sq)` is the set of squares one knight move away from `sq`,
//! ignoring occupancy. The standard table is built once and never mutated.

use once_cell::sync::Lazy;

use super::{Bitboard, Geometry, Square, MAX_SQUARES};

/// Knight moves for the standard 8x8 board.
pub static KNIGHT_MOVES: Lazy<MoveTable> = Lazy::new(|| MoveTable::new(Geometry::STANDARD));

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knight-move bitboards indexed by square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveTable {
    geometry: Geometry,
    moves: [Bitboard; MAX_SQUARES],
}

impl MoveTable {
    pub fn new(geometry: Geometry) -> Self {
        let width = geometry.width() as isize;
        let height = geometry.height() as isize;
        let mut moves = [Bitboard::EMPTY; MAX_SQUARES];

        for (sq, slot) in moves.iter_mut().enumerate().take(geometry.squares()) {
            let x = sq as isize % width;
            let y = sq as isize / width;
            let mut mask = 0u64;
            for (dx, dy) in KNIGHT_DELTAS {
                let nx = x + dx;
                let ny = y + dy;
                if (0..width).contains(&nx) && (0..height).contains(&ny) {
                    mask |= 1u64 << (nx + ny * width);
                }
            }
            *slot = Bitboard(mask);
        }

        MoveTable { geometry, moves }
    }

    #[inline]
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[inline]
    #[must_use]
    pub fn squares(&self) -> usize {
        self.geometry.squares()
    }

    #[inline(always)]
    #[must_use]
    pub fn moves(&self, sq: Square) -> Bitboard {
        self.moves[sq.index()]
    }

    /// Remove every move landing on `sq`, leaving moves out of it intact.
    #[cfg(test)]
    pub(crate) fn drop_moves_into(&mut self, sq: Square) {
        for slot in self.moves.iter_mut().take(self.geometry.squares()) {
            *slot = slot.and(Bitboard(sq.bit()).not());
        }
    }
}
