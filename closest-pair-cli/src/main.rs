//! A command line interface to benchmark *closest pair of points* algorithms.
//!

mod commands;

use clap::Command;
use commands::benchmark::{get_benchmark_app, run_benchmark};
use commands::check::{get_check_app, run_check};
use std::process;

fn main() {
    let matches = Command::new("Closest Pair Benchmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compares running time and results of closest pair of points algorithms")
        .subcommand(get_benchmark_app())
        .subcommand(get_check_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("benchmark", benchmark_matches)) => run_benchmark(benchmark_matches),
        Some(("check", check_matches)) => run_check(check_matches),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
