//! Iterative backtracking search for closed knight's tours.
//!
//! The search is a depth-first traversal driven by an explicit stack of
//! `(square, remaining candidates)` frames indexed by depth. Backtracking is
//! a decrement of the depth; frames above it are overwritten on the next
//! advance, so the hot loop never allocates.

use std::fmt;

use crate::board::{Bitboard, Board, MoveTable, Square, TourError, MAX_SQUARES};
use crate::report::TourSink;
use crate::tour::Tour;

/// Frames for every depth of a full-board path, plus one spare slot.
const STACK_SIZE: usize = MAX_SQUARES + 1;

/// Order of the sink hand-off and the replay verification for a found tour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportPolicy {
    /// Emit the tour, then verify it. A failing tour has already been emitted
    /// when the violation is raised.
    #[default]
    EmitThenVerify,
    /// Verify first and only emit tours that pass.
    VerifyThenEmit,
}

/// A tour the engine considered complete failed replay verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityViolation {
    pub start: Square,
    pub cause: TourError,
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tour from square {}: {}", self.start.0, self.cause)
    }
}

impl std::error::Error for IntegrityViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Counters for one exhausted starting square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Squares stepped onto (search tree nodes below the root)
    pub nodes: u64,
    /// Closed tours found
    pub tours: u64,
}

#[derive(Clone, Copy, Debug, Default)]
struct Frame {
    square: Square,
    candidates: Bitboard,
}

/// Exhaustive closed-tour search over one move table.
#[derive(Clone, Copy, Debug)]
pub struct TourSearch<'a> {
    table: &'a MoveTable,
    policy: ReportPolicy,
}

impl<'a> TourSearch<'a> {
    pub fn new(table: &'a MoveTable) -> Self {
        TourSearch {
            table,
            policy: ReportPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ReportPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn table(&self) -> &'a MoveTable {
        self.table
    }

    /// Enumerate every closed tour rooted at `start`, handing each to `sink`.
    ///
    /// Candidates are tried lowest square first, so the discovery order for a
    /// given start is fixed. Returns early with the violation if a found tour
    /// fails verification; tours already handed over stay reported.
    pub fn run<S>(&self, start: Square, sink: &S) -> Result<SearchStats, IntegrityViolation>
    where
        S: TourSink + ?Sized,
    {
        debug_assert!(start.index() < self.table.squares());

        let table = self.table;
        let max_depth = table.squares() - 1;
        let mut board = Board::new();
        let mut stack = [Frame::default(); STACK_SIZE];
        let mut stats = SearchStats::default();

        board.mark(start);
        stack[0] = Frame {
            square: start,
            candidates: table.moves(start),
        };
        // Squares from which the start is one move away.
        let initial_reach = stack[0].candidates;
        let mut depth = 0usize;

        loop {
            let frame = &mut stack[depth];
            if !frame.candidates.is_empty() {
                let next = frame.candidates.pop_lsb();
                board.mark(next);

                depth += 1;
                stack[depth] = Frame {
                    square: next,
                    candidates: table.moves(next).and(board.bitboard().not()),
                };
                stats.nodes += 1;

                if depth == max_depth && initial_reach.contains(next) {
                    stats.tours += 1;
                    let tour = Tour::from_iter_exact(stack[..=depth].iter().map(|f| f.square));
                    self.report(start, &tour, sink)?;
                }
            } else if depth > 0 {
                board.unmark(frame.square);
                depth -= 1;
            } else {
                return Ok(stats);
            }
        }
    }

    fn report<S>(&self, start: Square, tour: &Tour, sink: &S) -> Result<(), IntegrityViolation>
    where
        S: TourSink + ?Sized,
    {
        match self.policy {
            ReportPolicy::EmitThenVerify => {
                sink.tour(tour);
                self.verify(start, tour)
            }
            ReportPolicy::VerifyThenEmit => {
                self.verify(start, tour)?;
                sink.tour(tour);
                Ok(())
            }
        }
    }

    fn verify(&self, start: Square, tour: &Tour) -> Result<(), IntegrityViolation> {
        tour.verify(start, self.table)
            .map_err(|cause| IntegrityViolation { start, cause })
    }
}
