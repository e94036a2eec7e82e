//! Bitboard type and operations.

use super::square::Square;

/// A 64-bit set of squares; bit `i` is set when square `i` is a member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
}

/// Maps `((x & -x) * DEBRUIJN_64) >> 58` back to the bit index.
const DEBRUIJN_64: u64 = 0x03f7_9d71_b4cb_0a89;

#[rustfmt::skip]
const DEBRUIJN_INDEX: [u8; 64] = [
     0,  1, 48,  2, 57, 49, 28,  3,
    61, 58, 50, 42, 38, 29, 17,  4,
    62, 55, 59, 36, 53, 51, 43, 22,
    45, 39, 33, 30, 24, 18, 12,  5,
    63, 47, 56, 27, 60, 41, 37, 16,
    54, 35, 52, 21, 44, 32, 23, 11,
    46, 26, 40, 15, 34, 20, 31, 10,
    25, 14, 19,  9, 13,  8,  7,  6,
];

/// Index of the lowest set bit using the De Bruijn multiplication
/// (Leiserson, Prokop, Randall).
///
/// `x` must be nonzero; the result for zero is meaningless.
#[inline]
#[must_use]
pub const fn bit_scan_forward(x: u64) -> u8 {
    debug_assert!(x != 0, "bit_scan_forward on an empty set");
    let isolated = x & x.wrapping_neg();
    DEBRUIJN_INDEX[(isolated.wrapping_mul(DEBRUIJN_64) >> 58) as usize]
}

/// Index of the lowest set bit using the hardware trailing-zero count.
///
/// Same contract as [`bit_scan_forward`].
#[inline]
#[must_use]
pub const fn bit_scan_forward_tzcnt(x: u64) -> u8 {
    debug_assert!(x != 0, "bit_scan_forward on an empty set");
    x.trailing_zeros() as u8
}

impl Bitboard {
    /// Returns an iterator over the squares set in this bitboard, lowest first
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
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & sq.bit()) != 0
    }

    /// Lowest member of a nonempty set
    #[inline]
    #[must_use]
    pub const fn lsb(self) -> Square {
        Square(bit_scan_forward(self.0))
    }

    /// Remove and return the lowest member of a nonempty set
    #[inline]
    pub fn pop_lsb(&mut self) -> Square {
        let sq = self.lsb();
        self.0 &= self.0 - 1;
        sq
    }

    /// Bitwise AND
    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    /// Bitwise NOT
    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.pop_lsb())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}
