//! Parallel search over starting squares.
//!
//! Each worker runs the tour search sequentially over an interleaved slice of
//! the starting squares: worker `k` of `n` takes `starts[k]`, `starts[k + n]`,
//! and so on. Searches from a single start are never split. Workers share
//! nothing but the sink.

use std::fmt;
use std::io;
use std::thread;

use crate::board::{MoveTable, Square};
use crate::report::TourSink;
use crate::search::{ReportPolicy, TourSearch};

/// Configuration for a dispatched search
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Number of worker threads
    pub threads: usize,
    /// Starting squares to search; `None` searches every square of the table
    pub starts: Option<Vec<Square>>,
    /// Ordering of emission and verification for found tours
    pub policy: ReportPolicy,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            threads: default_threads(),
            starts: None,
            policy: ReportPolicy::default(),
        }
    }
}

impl DispatchConfig {
    /// Create config with specified thread count
    #[must_use]
    pub fn with_threads(threads: usize) -> Self {
        DispatchConfig {
            threads: threads.max(1),
            ..Default::default()
        }
    }

    /// Restrict the search to the given starting squares
    #[must_use]
    pub fn starts(mut self, starts: Vec<Square>) -> Self {
        self.starts = Some(starts);
        self
    }

    /// Set report policy
    #[must_use]
    pub fn policy(mut self, policy: ReportPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Hardware parallelism, but at least two workers.
pub fn default_threads() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .max(2)
}

/// Outcome of one worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerResult {
    pub worker_id: usize,
    /// Starting squares searched, in order
    pub searched: Vec<Square>,
    /// Starting squares whose search stopped on an integrity violation
    pub abandoned: Vec<Square>,
}

/// Failures of the thread harness itself
#[derive(Debug)]
pub enum DispatchError {
    /// A starting square lies outside the move table's board
    StartOutOfRange { square: Square, squares: usize },
    /// The OS refused to start a worker
    Spawn { worker_id: usize, source: io::Error },
    /// A worker panicked
    WorkerPanicked { worker_id: usize },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::StartOutOfRange { square, squares } => {
                write!(f, "Start square {} outside a board of {squares} squares", square.0)
            }
            DispatchError::Spawn { worker_id, source } => {
                write!(f, "Failed to spawn worker {worker_id}: {source}")
            }
            DispatchError::WorkerPanicked { worker_id } => {
                write!(f, "Worker {worker_id} panicked")
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Run the search for every configured start and wait for all workers.
///
/// Results are ordered by worker id.
pub fn dispatch<S>(
    config: &DispatchConfig,
    table: &MoveTable,
    sink: &S,
) -> Result<Vec<WorkerResult>, DispatchError>
where
    S: TourSink + Sync + ?Sized,
{
    let starts: Vec<Square> = match &config.starts {
        Some(starts) => starts.clone(),
        None => Square::all(table.geometry()).collect(),
    };
    if let Some(&square) = starts.iter().find(|sq| sq.index() >= table.squares()) {
        return Err(DispatchError::StartOutOfRange {
            square,
            squares: table.squares(),
        });
    }

    let threads = config.threads.max(1);
    let search = TourSearch::new(table).with_policy(config.policy);
    let starts = starts.as_slice();

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);
        for worker_id in 0..threads {
            let handle = thread::Builder::new()
                .name(format!("tour-{worker_id}"))
                .spawn_scoped(scope, move || {
                    run_worker(worker_id, threads, starts, search, sink)
                })
                .map_err(|source| DispatchError::Spawn { worker_id, source })?;
            handles.push(handle);
        }

        // Join everyone before reporting a panic.
        let mut results = Vec::with_capacity(threads);
        let mut panicked = None;
        for (worker_id, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(result) => results.push(result),
                Err(_) => {
                    log::error!("worker {worker_id} panicked");
                    panicked.get_or_insert(worker_id);
                }
            }
        }

        match panicked {
            Some(worker_id) => Err(DispatchError::WorkerPanicked { worker_id }),
            None => Ok(results),
        }
    })
}

fn run_worker<S>(
    worker_id: usize,
    stride: usize,
    starts: &[Square],
    search: TourSearch<'_>,
    sink: &S,
) -> WorkerResult
where
    S: TourSink + ?Sized,
{
    let geometry = search.table().geometry();
    let mut result = WorkerResult {
        worker_id,
        searched: Vec::new(),
        abandoned: Vec::new(),
    };

    for &start in starts.iter().skip(worker_id).step_by(stride) {
        log::info!("thread {worker_id}: {}", start.name(geometry));
        result.searched.push(start);

        match search.run(start, sink) {
            Ok(stats) => log::debug!(
                "thread {worker_id}: {} exhausted, {} nodes, {} tours",
                start.name(geometry),
                stats.nodes,
                stats.tours
            ),
            Err(violation) => {
                log::error!("invalid_tour");
                log::debug!("thread {worker_id}: {violation}");
                result.abandoned.push(start);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Geometry;
    use crate::tour::Tour;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<Tour>>);

    impl TourSink for Collect {
        fn tour(&self, tour: &Tour) {
            self.0.lock().push(*tour);
        }
    }

    #[test]
    fn test_interleaved_partition() {
        let table = MoveTable::new(Geometry::new(3, 3).unwrap());
        let config = DispatchConfig::with_threads(4);
        let results = dispatch(&config, &table, &Collect::default()).unwrap();

        let searched: Vec<Vec<u8>> = results
            .iter()
            .map(|r| r.searched.iter().map(|sq| sq.0).collect())
            .collect();
        assert_eq!(
            searched,
            vec![vec![0, 4, 8], vec![1, 5], vec![2, 6], vec![3, 7]]
        );
        assert!(results.iter().all(|r| r.abandoned.is_empty()));
    }

    #[test]
    fn test_more_threads_than_starts() {
        let table = MoveTable::new(Geometry::new(2, 1).unwrap());
        let results = dispatch(&DispatchConfig::with_threads(5), &table, &Collect::default()).unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(results.iter().map(|r| r.searched.len()).sum::<usize>(), 2);
    }

    #[test]
    fn test_start_subset() {
        let table = MoveTable::new(Geometry::new(3, 10).unwrap());
        let sink = Collect::default();
        let config = DispatchConfig::with_threads(2).starts(vec![Square(0), Square(29)]);
        let results = dispatch(&config, &table, &sink).unwrap();

        assert_eq!(results[0].searched, vec![Square(0)]);
        assert_eq!(results[1].searched, vec![Square(29)]);
        assert_eq!(sink.0.lock().len(), 64);
    }

    #[test]
    fn test_start_out_of_range() {
        let table = MoveTable::new(Geometry::new(3, 4).unwrap());
        let config = DispatchConfig::with_threads(1).starts(vec![Square(12)]);
        let err = dispatch(&config, &table, &Collect::default()).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::StartOutOfRange { squares: 12, .. }
        ));
    }

    fn table_without_moves_into_corner() -> MoveTable {
        let mut table = MoveTable::new(Geometry::new(3, 10).unwrap());
        table.drop_moves_into(Square(0));
        table
    }

    #[test]
    fn test_integrity_violation_abandons_only_that_start() {
        let table = table_without_moves_into_corner();
        let sink = Collect::default();
        let config = DispatchConfig::with_threads(1).starts(vec![Square(0), Square(1)]);
        let results = dispatch(&config, &table, &sink).unwrap();

        assert_eq!(results[0].searched, vec![Square(0), Square(1)]);
        assert_eq!(results[0].abandoned, vec![Square(0)]);
        // Emitted before the replay failed; start 1 has no tours without the corner.
        let tours = sink.0.into_inner();
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].start(), Square(0));
    }

    #[test]
    fn test_verify_first_withholds_invalid_tours() {
        let table = table_without_moves_into_corner();
        let sink = Collect::default();
        let config = DispatchConfig::with_threads(1)
            .starts(vec![Square(0), Square(1), Square(0)])
            .policy(ReportPolicy::VerifyThenEmit);
        let results = dispatch(&config, &table, &sink).unwrap();

        assert_eq!(results[0].searched, vec![Square(0), Square(1), Square(0)]);
        assert_eq!(results[0].abandoned, vec![Square(0), Square(0)]);
        assert!(sink.0.lock().is_empty());
    }

    #[test]
    fn test_emit_first_reports_one_tour_per_abandoned_start() {
        let table = table_without_moves_into_corner();
        let sink = Collect::default();
        let config = DispatchConfig::with_threads(2)
            .starts(vec![Square(0), Square(1), Square(0)])
            .policy(ReportPolicy::EmitThenVerify);
        let results = dispatch(&config, &table, &sink).unwrap();

        assert_eq!(results[0].searched, vec![Square(0), Square(0)]);
        assert_eq!(results[0].abandoned, vec![Square(0), Square(0)]);
        assert_eq!(results[1].searched, vec![Square(1)]);
        assert!(results[1].abandoned.is_empty());
        assert_eq!(sink.0.lock().len(), 2);
    }

    #[test]
    fn test_default_threads_at_least_two() {
        assert!(default_threads() >= 2);
        assert_eq!(DispatchConfig::with_threads(0).threads, 1);
    }
}
