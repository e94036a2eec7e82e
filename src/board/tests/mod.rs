//! Board module tests.
//!
//! - `mark_unmark.rs` - occupancy board marking and path replay
//! - `proptest.rs` - property-based tests for bitboards and the selector
