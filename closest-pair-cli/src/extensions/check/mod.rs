//! Verifies that all algorithms agree on the same random input.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check_test.rs"]
mod check_test;

use crate::extensions::config::BenchmarkConfig;
use closest_pair_core::prelude::*;
use closest_pair_core::solver::NoopObserver;
use rustc_hash::FxHashSet;
use std::io::{BufWriter, Write};

/// Maximum allowed difference between distances found by different algorithms.
pub const DISTANCE_TOLERANCE: Float = 1E-9;

/// Contains results of correctness check.
pub struct CheckReport {
    /// Closest pair found by each algorithm.
    pub results: Vec<(Algorithm, ClosestPair)>,
    /// True if all algorithms found the same minimum distance.
    pub is_consistent: bool,
}

/// Generates `check_size` points and runs every configured algorithm on its own copy.
pub fn run_check(config: &BenchmarkConfig) -> GenericResult<CheckReport> {
    let points = generate_random_points(config.check_size, config.seed, config.bounds);
    (config.logger)(format!("running correctness check on {} points", points.len()).as_str());

    check_points(&points, &config.algorithms)
}

/// Runs algorithms on given points and compares their results. Returns an error if any
/// algorithm returns a point which is not present in the input.
pub fn check_points(points: &[Point], algorithms: &[Algorithm]) -> GenericResult<CheckReport> {
    let members = points.iter().collect::<FxHashSet<_>>();

    let results = algorithms
        .iter()
        .map(|&algorithm| -> GenericResult<(Algorithm, ClosestPair)> {
            let pair = algorithm.solve(points.to_vec(), &mut NoopObserver)?;
            let (first, second) = pair.points();

            if members.contains(&first) && members.contains(&second) {
                Ok((algorithm, pair))
            } else {
                Err(format!("{} returned a pair which is not from the input: {pair}", algorithm.name()).into())
            }
        })
        .collect::<GenericResult<Vec<_>>>()?;

    let is_consistent = results
        .windows(2)
        .all(|window| (window[0].1.distance() - window[1].1.distance()).abs() < DISTANCE_TOLERANCE);

    Ok(CheckReport { results, is_consistent })
}

/// Writes check report in human readable form.
pub fn write_check_report<W: Write>(writer: &mut BufWriter<W>, report: &CheckReport) -> GenericResult<()> {
    writeln!(writer, "=== CORRECTNESS CHECK ===")?;

    for (algorithm, pair) in report.results.iter() {
        writeln!(writer, "{}: {pair}", algorithm.name())?;
    }

    writeln!(writer, "All algorithms produce the same result: {}", if report.is_consistent { "YES" } else { "NO" })?;
    writer.flush()?;

    Ok(())
}
