#[cfg(test)]
#[path = "../../tests/unit/commands/benchmark_test.rs"]
mod benchmark_test;

use super::*;
use clap::Command;
use closest_pair_cli::extensions::benchmark::{
    run_benchmark as run_benchmark_with_config, write_benchmark_json, write_benchmark_table,
};

pub const SIZES_ARG_NAME: &str = "sizes";
pub const BRUTE_FORCE_LIMIT_ARG_NAME: &str = "brute-force-limit";
pub const FORMAT_ARG_NAME: &str = "format";

pub fn get_benchmark_app() -> Command {
    Command::new("benchmark")
        .about("Measures running time of closest pair algorithms on random points")
        .args(get_common_args())
        .arg(
            Arg::new(SIZES_ARG_NAME)
                .help("Specifies comma separated amounts of points, e.g. \"128,256,512\"")
                .short('s')
                .long(SIZES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BRUTE_FORCE_LIMIT_ARG_NAME)
                .help("Brute force algorithm is skipped for inputs bigger than this limit")
                .long(BRUTE_FORCE_LIMIT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies output format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .value_parser(["table", "json"])
                .default_value("table"),
        )
}

pub fn run_benchmark(matches: &ArgMatches) -> Result<(), String> {
    let mut builder = create_builder_from_args(matches)?;

    if let Some(sizes) = parse_int_list_value::<usize>(matches, SIZES_ARG_NAME, "sizes")? {
        builder = builder.with_sizes(sizes);
    }

    if let Some(limit) = parse_int_value::<usize>(matches, BRUTE_FORCE_LIMIT_ARG_NAME, "brute force limit")? {
        builder = builder.with_brute_force_limit(limit);
    }

    let config = builder.build()?;
    let records = run_benchmark_with_config(&config)?;

    let mut out_buffer = create_out_buffer(matches)?;
    match matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str) {
        Some("json") => write_benchmark_json(&mut out_buffer, records.as_slice()),
        _ => write_benchmark_table(&mut out_buffer, records.as_slice()),
    }
    .map_err(|err| format!("cannot write benchmark results: '{err}'"))
}
