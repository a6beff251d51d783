#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::Command;
use closest_pair_cli::extensions::check::{run_check as run_check_with_config, write_check_report};

pub const CHECK_SIZE_ARG_NAME: &str = "check-size";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Verifies that all closest pair algorithms find the same minimum distance")
        .args(get_common_args())
        .arg(
            Arg::new(CHECK_SIZE_ARG_NAME)
                .help("Specifies amount of random points to check")
                .short('n')
                .long(CHECK_SIZE_ARG_NAME)
                .required(false),
        )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let mut builder = create_builder_from_args(matches)?;

    if let Some(check_size) = parse_int_value::<usize>(matches, CHECK_SIZE_ARG_NAME, "check size")? {
        builder = builder.with_check_size(check_size);
    }

    let config = builder.build()?;
    let report = run_check_with_config(&config)?;

    let mut out_buffer = create_out_buffer(matches)?;
    write_check_report(&mut out_buffer, &report).map_err(|err| format!("cannot write check results: '{err}'"))?;

    if report.is_consistent { Ok(()) } else { Err("algorithms found different minimum distances".to_string()) }
}
