//! Tour reporting.
//!
//! The reporter is the only state shared between workers: a sequence counter
//! and a lock around the output writer.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::board::Geometry;
use crate::tour::Tour;

/// Receiver of completed tours.
pub trait TourSink {
    fn tour(&self, tour: &Tour);
}

impl<T: TourSink + ?Sized> TourSink for &T {
    fn tour(&self, tour: &Tour) {
        (**self).tour(tour);
    }
}

/// Numbers each tour and writes it as one line:
/// `[<sequence>, <start>]: <square> <square> ...`
pub struct Reporter<W> {
    geometry: Geometry,
    sequence: AtomicU64,
    out: Mutex<W>,
}

impl Reporter<io::Stdout> {
    /// Reporter for standard-board tours on stdout
    pub fn stdout() -> Self {
        Reporter::new(io::stdout(), Geometry::STANDARD)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, geometry: Geometry) -> Self {
        Reporter {
            geometry,
            sequence: AtomicU64::new(0),
            out: Mutex::new(out),
        }
    }

    /// Number of tours reported so far
    pub fn reported(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }

    /// Write the completion marker and flush.
    pub fn finish(&self) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "done.")?;
        out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn format_line(&self, sequence: u64, tour: &Tour) -> String {
        let header = format!("[{}, {}]:", sequence, tour.start().name(self.geometry));
        std::iter::once(header)
            .chain(tour.iter().skip(1).map(|sq| sq.name(self.geometry).to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<W: Write> TourSink for Reporter<W> {
    fn tour(&self, tour: &Tour) {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let line = self.format_line(sequence, tour);

        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{line}") {
            log::warn!("failed to write tour {sequence}: {err}");
        }
    }
}
