//! Worker count must not change which tours are found.

use std::collections::HashMap;

use knights_tour::board::{Geometry, MoveTable};
use knights_tour::{dispatch, DispatchConfig, ReportPolicy, Reporter, Tour, TourSink};
use parking_lot::Mutex;

#[derive(Default)]
struct Collect(Mutex<Vec<Tour>>);

impl TourSink for Collect {
    fn tour(&self, tour: &Tour) {
        self.0.lock().push(*tour);
    }
}

fn multiset(tours: Vec<Tour>) -> HashMap<Tour, usize> {
    let mut counts = HashMap::new();
    for tour in tours {
        *counts.entry(tour).or_insert(0) += 1;
    }
    counts
}

fn collect(table: &MoveTable, config: &DispatchConfig) -> Vec<Tour> {
    let sink = Collect::default();
    dispatch(config, table, &sink).unwrap();
    sink.0.into_inner()
}

#[test]
fn worker_count_does_not_change_tours() {
    let table = MoveTable::new(Geometry::new(10, 3).unwrap());
    let single = multiset(collect(&table, &DispatchConfig::with_threads(1)));
    assert_eq!(single.values().sum::<usize>(), 960);

    for threads in [2, 3, 7, 64] {
        let parallel = multiset(collect(&table, &DispatchConfig::with_threads(threads)));
        assert_eq!(single, parallel, "{threads} workers");
    }
}

#[test]
fn per_start_discovery_order_is_stable_across_workers() {
    let table = MoveTable::new(Geometry::new(6, 5).unwrap());
    let single = collect(&table, &DispatchConfig::with_threads(1));
    let parallel = collect(&table, &DispatchConfig::with_threads(4));

    for start in knights_tour::Square::all(table.geometry()) {
        let a: Vec<&Tour> = single.iter().filter(|t| t.start() == start).collect();
        let b: Vec<&Tour> = parallel.iter().filter(|t| t.start() == start).collect();
        assert_eq!(a, b);
    }
}

#[test]
fn verify_first_policy_reports_the_same_tours() {
    let table = MoveTable::new(Geometry::new(5, 6).unwrap());
    let config = DispatchConfig::with_threads(2);
    let emitted = multiset(collect(&table, &config));
    let gated = multiset(collect(
        &table,
        &config.clone().policy(ReportPolicy::VerifyThenEmit),
    ));
    assert_eq!(emitted, gated);
}

#[test]
fn reporter_numbers_tours_across_workers() {
    let geometry = Geometry::new(3, 10).unwrap();
    let table = MoveTable::new(geometry);
    let reporter = Reporter::new(Vec::new(), geometry);
    dispatch(&DispatchConfig::with_threads(4), &table, &reporter).unwrap();
    assert_eq!(reporter.reported(), 960);

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    let mut sequences: Vec<u64> = output
        .lines()
        .map(|line| {
            let (head, squares) = line.split_once("]: ").unwrap();
            assert_eq!(squares.split(' ').count(), 29);
            head[1..head.find(',').unwrap()].parse().unwrap()
        })
        .collect();
    sequences.sort_unstable();
    assert_eq!(sequences, (1..=960).collect::<Vec<u64>>());
}
