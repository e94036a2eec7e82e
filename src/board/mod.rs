//! Board representation for the knight's tour search.
//!
//! Uses bitboards for the occupancy set and the precomputed move table.
//!
//! # Example
//! ```
//! use knights_tour::board::{Board, Square, KNIGHT_MOVES};
//!
//! let h1: Square = "H1".parse().unwrap();
//! let mut board = Board::new();
//! board.mark(h1);
//! let open = KNIGHT_MOVES.moves(h1).and(board.bitboard().not());
//! assert_eq!(open.popcount(), 2);
//! ```

mod error;
mod move_table;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{GeometryError, SquareError, TourError};
pub use move_table::{MoveTable, KNIGHT_MOVES};
pub use state::Board;
pub use types::{
    bit_scan_forward, bit_scan_forward_tzcnt, Bitboard, BitboardIter, Geometry, Square,
    SquareName, MAX_SQUARES, MAX_WIDTH,
};
