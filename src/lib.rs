//! Exhaustive enumeration of closed knight's tours on a bitboard.
//!
//! # Example
//! ```
//! use knights_tour::board::{Geometry, MoveTable, Square};
//! use knights_tour::{Reporter, TourSearch};
//!
//! let table = MoveTable::new(Geometry::new(3, 10).unwrap());
//! let reporter = Reporter::new(Vec::new(), table.geometry());
//! let stats = TourSearch::new(&table).run(Square(0), &reporter).unwrap();
//! assert_eq!(stats.tours, 32);
//! ```

pub mod board;
pub mod dispatch;
pub mod report;
pub mod search;
pub mod tour;

pub use board::{Bitboard, Board, Geometry, MoveTable, Square, KNIGHT_MOVES};
pub use dispatch::{dispatch, DispatchConfig, DispatchError, WorkerResult};
pub use report::{Reporter, TourSink};
pub use search::{IntegrityViolation, ReportPolicy, SearchStats, TourSearch};
pub use tour::Tour;
