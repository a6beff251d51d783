use clap::{Arg, ArgAction, ArgMatches};

pub mod benchmark;
pub mod check;

use closest_pair_cli::extensions::config::{BenchmarkConfigBuilder, read_config};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;

pub const CONFIG_ARG_NAME: &str = "config";
pub const SEED_ARG_NAME: &str = "seed";
pub const BOUNDS_ARG_NAME: &str = "bounds";
pub const LOG_ARG_NAME: &str = "log";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";

/// Returns arguments shared by all commands.
pub(crate) fn get_common_args() -> Vec<Arg> {
    vec![
        Arg::new(CONFIG_ARG_NAME)
            .help("Specifies path to a json file with benchmark configuration")
            .short('c')
            .long(CONFIG_ARG_NAME)
            .required(false),
        Arg::new(SEED_ARG_NAME).help("Specifies a seed for random point generation").long(SEED_ARG_NAME).required(false),
        Arg::new(BOUNDS_ARG_NAME)
            .help("Specifies an exclusive upper bound of generated coordinates")
            .long(BOUNDS_ARG_NAME)
            .required(false),
        Arg::new(LOG_ARG_NAME)
            .help("Specifies whether progress is written to standard output")
            .short('l')
            .long(LOG_ARG_NAME)
            .action(ArgAction::SetTrue),
        Arg::new(OUT_RESULT_ARG_NAME)
            .help("Specifies path to the file for result output")
            .short('o')
            .long(OUT_RESULT_ARG_NAME)
            .required(false),
    ]
}

/// Creates a config builder from config file and common arguments.
pub(crate) fn create_builder_from_args(matches: &ArgMatches) -> Result<BenchmarkConfigBuilder, String> {
    let mut builder = BenchmarkConfigBuilder::default();

    if let Some(path) = matches.get_one::<String>(CONFIG_ARG_NAME) {
        let config = read_config(BufReader::new(open_file(path, "config")?))?;
        builder = builder.with_config(config);
    }

    if let Some(seed) = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")? {
        builder = builder.with_seed(seed);
    }

    if let Some(bounds) = parse_float_value::<f64>(matches, BOUNDS_ARG_NAME, "bounds")? {
        builder = builder.with_bounds(bounds);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        builder = builder.with_logging(true);
    }

    Ok(builder)
}

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

pub(crate) fn create_out_buffer(matches: &ArgMatches) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_file))
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_list_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<Vec<T>>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.split(',')
                .map(|value| value.trim().parse::<T>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| format!("cannot get list of integers, error: '{err}': '{arg_desc}'"))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}
