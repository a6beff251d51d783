//! Benchmark configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/config_test.rs"]
mod config_test;

use closest_pair_core::prelude::*;
use closest_pair_core::utils::{create_silent_logger, create_stdout_logger};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// Default input sizes: powers of two from 2^7 to 2^18.
pub const DEFAULT_SIZES: [usize; 12] = [128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536, 131072, 262144];
/// Default seed for point generation.
pub const DEFAULT_SEED: u64 = 42;
/// Default upper bound for point coordinates.
pub const DEFAULT_BOUNDS: Float = 1000.;
/// Default amount of points used by correctness check.
pub const DEFAULT_CHECK_SIZE: usize = 100;

/// A benchmark configuration as it is stored in a file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies amount of points for each benchmark run.
    pub sizes: Option<Vec<usize>>,
    /// Specifies a seed for random point generation.
    pub seed: Option<u64>,
    /// Specifies an exclusive upper bound for both coordinates.
    pub bounds: Option<Float>,
    /// Brute force is skipped for sizes above this limit.
    pub brute_force_limit: Option<usize>,
    /// Specifies amount of points used by correctness check.
    pub check_size: Option<usize>,
    /// Specifies which algorithms to run.
    pub algorithms: Option<Vec<Algorithm>>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
}

/// A resolved benchmark configuration.
pub struct BenchmarkConfig {
    /// Amount of points for each benchmark run.
    pub sizes: Vec<usize>,
    /// A seed for random point generation.
    pub seed: u64,
    /// An exclusive upper bound for both coordinates.
    pub bounds: Float,
    /// Brute force is skipped for sizes above this limit.
    pub brute_force_limit: Option<usize>,
    /// Amount of points used by correctness check.
    pub check_size: usize,
    /// Algorithms to run.
    pub algorithms: Vec<Algorithm>,
    /// A logger.
    pub logger: InfoLogger,
}

impl BenchmarkConfig {
    /// Checks whether algorithm should run on given input size.
    pub fn is_enabled(&self, algorithm: Algorithm, size: usize) -> bool {
        self.algorithms.contains(&algorithm)
            && !(algorithm == Algorithm::BruteForce && self.brute_force_limit.is_some_and(|limit| size > limit))
    }
}

/// Builds `BenchmarkConfig` from defaults, a config file and explicit overrides.
#[derive(Default)]
pub struct BenchmarkConfigBuilder {
    config: Config,
    logger: Option<InfoLogger>,
}

impl BenchmarkConfigBuilder {
    /// Uses values from config as a base, explicit overrides take precedence.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets input sizes.
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.config.sizes = Some(sizes);
        self
    }

    /// Sets a seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets coordinate bounds.
    pub fn with_bounds(mut self, bounds: Float) -> Self {
        self.config.bounds = Some(bounds);
        self
    }

    /// Sets brute force size limit.
    pub fn with_brute_force_limit(mut self, limit: usize) -> Self {
        self.config.brute_force_limit = Some(limit);
        self
    }

    /// Sets correctness check size.
    pub fn with_check_size(mut self, check_size: usize) -> Self {
        self.config.check_size = Some(check_size);
        self
    }

    /// Enables or disables logging to standard output.
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.config.logging = Some(LoggingConfig { enabled });
        self
    }

    /// Sets a custom logger, it is used regardless of logging config.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds and validates configuration.
    pub fn build(self) -> GenericResult<BenchmarkConfig> {
        let Config { sizes, seed, bounds, brute_force_limit, check_size, algorithms, logging } = self.config;

        let sizes = sizes.unwrap_or_else(|| DEFAULT_SIZES.to_vec());
        let bounds = bounds.unwrap_or(DEFAULT_BOUNDS);
        let check_size = check_size.unwrap_or(DEFAULT_CHECK_SIZE);
        let algorithms = algorithms.unwrap_or_else(Algorithm::all);

        if sizes.is_empty() {
            return Err("at least one size should be specified".into());
        }

        if let Some(size) = sizes.iter().find(|&&size| size < 2) {
            return Err(format!("each size should be at least 2, got {size}").into());
        }

        if check_size < 2 {
            return Err(format!("check size should be at least 2, got {check_size}").into());
        }

        if !bounds.is_finite() || bounds <= 0. {
            return Err(format!("bounds should be a positive finite number, got {bounds}").into());
        }

        if algorithms.is_empty() {
            return Err("at least one algorithm should be specified".into());
        }

        let logger = self.logger.unwrap_or_else(|| match logging {
            Some(LoggingConfig { enabled: true }) => create_stdout_logger(),
            _ => create_silent_logger(),
        });

        Ok(BenchmarkConfig {
            sizes,
            seed: seed.unwrap_or(DEFAULT_SEED),
            bounds,
            brute_force_limit,
            check_size,
            algorithms,
            logger,
        })
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
