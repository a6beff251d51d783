//! Measures running time of closest pair algorithms on random inputs of growing size.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/benchmark_test.rs"]
mod benchmark_test;

use crate::extensions::config::BenchmarkConfig;
use closest_pair_core::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// Keeps running time of each algorithm for one input size.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    /// Amount of points.
    pub size: usize,
    /// Optimized algorithm duration in milliseconds.
    pub optimized: Option<u128>,
    /// Brute force duration in milliseconds.
    pub brute_force: Option<u128>,
    /// Divide and conquer duration in milliseconds.
    pub divide_and_conquer: Option<u128>,
    /// Amount of distance evaluations made by the optimized algorithm.
    pub comparisons: Option<usize>,
}

impl BenchmarkRecord {
    fn new(size: usize) -> Self {
        Self { size, ..Self::default() }
    }

    /// Returns duration of given algorithm, `None` if it was skipped.
    pub fn duration(&self, algorithm: Algorithm) -> Option<u128> {
        match algorithm {
            Algorithm::Optimized => self.optimized,
            Algorithm::BruteForce => self.brute_force,
            Algorithm::DivideAndConquer => self.divide_and_conquer,
        }
    }

    fn set_duration(&mut self, algorithm: Algorithm, millis: u128) {
        let slot = match algorithm {
            Algorithm::Optimized => &mut self.optimized,
            Algorithm::BruteForce => &mut self.brute_force,
            Algorithm::DivideAndConquer => &mut self.divide_and_conquer,
        };

        *slot = Some(millis);
    }
}

/// Runs every enabled algorithm on each configured size. Each algorithm gets its own copy
/// of the same generated points.
pub fn run_benchmark(config: &BenchmarkConfig) -> GenericResult<Vec<BenchmarkRecord>> {
    config.sizes.iter().map(|&size| run_benchmark_for_size(config, size)).collect()
}

fn run_benchmark_for_size(config: &BenchmarkConfig, size: usize) -> GenericResult<BenchmarkRecord> {
    let logger = &config.logger;

    let (points, duration) = Timer::measure_duration(|| generate_random_points(size, config.seed, config.bounds));
    (logger)(format!("generated {size} points in {}ms", duration.as_millis()).as_str());

    let mut record = BenchmarkRecord::new(size);

    for algorithm in Algorithm::all() {
        if !config.is_enabled(algorithm, size) {
            (logger)(format!("{} is skipped for {size} points", algorithm.name()).as_str());
            continue;
        }

        let points = points.clone();
        let mut counter = ComparisonCounter::default();
        let (pair, duration) = Timer::measure_duration(|| algorithm.solve(points, &mut counter));
        let pair = pair?;

        (logger)(format!("{}: {pair} in {}ms", algorithm.name(), duration.as_millis()).as_str());

        record.set_duration(algorithm, duration.as_millis());
        if algorithm == Algorithm::Optimized {
            record.comparisons = Some(counter.comparisons());
        }
    }

    Ok(record)
}

/// Writes benchmark records as a text table.
pub fn write_benchmark_table<W: Write>(writer: &mut BufWriter<W>, records: &[BenchmarkRecord]) -> GenericResult<()> {
    let algorithms = Algorithm::all();
    let names = algorithms.iter().map(|algorithm| algorithm.name()).collect::<Vec<_>>();

    writeln!(writer, "=== COMPARISON OF CLOSEST PAIR ALGORITHMS ===")?;
    writeln!(writer)?;
    writeln!(writer, "{:<8} {:<15} {:<15} {:<15}", "Size", names[0], names[1], names[2])?;
    writeln!(writer, "{:<8} {:<15} {:<15} {:<15}", "", "(ms)", "(ms)", "(ms)")?;
    writeln!(writer, "{}", "-".repeat(60))?;

    for record in records {
        let cells = algorithms
            .iter()
            .map(|&algorithm| record.duration(algorithm).map_or_else(|| "---".to_string(), |millis| millis.to_string()))
            .collect::<Vec<_>>();

        writeln!(writer, "{:<8} {:<15} {:<15} {:<15}", record.size, cells[0], cells[1], cells[2])?;
    }

    writer.flush()?;

    Ok(())
}

/// Writes benchmark records as json.
pub fn write_benchmark_json<W: Write>(writer: &mut BufWriter<W>, records: &[BenchmarkRecord]) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut *writer, records)
        .map_err(|err| GenericError::from(format!("cannot serialize benchmark results: '{err}'")))?;
    writer.flush()?;

    Ok(())
}
