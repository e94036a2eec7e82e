//! Core board types.
//!
//! - `Square` - bit position of a board square, with naming
//! - `Bitboard` - 64-bit square set and the lowest-set-bit selector
//! - `Geometry` - board dimensions

mod bitboard;
mod geometry;
mod square;

pub use bitboard::{bit_scan_forward, bit_scan_forward_tzcnt, Bitboard, BitboardIter};
pub use geometry::{Geometry, MAX_SQUARES, MAX_WIDTH};
pub use square::{Square, SquareName};
