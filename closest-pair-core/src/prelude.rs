//! This module reimports a common used types.

pub use crate::models::ClosestPair;
pub use crate::models::Point;

pub use crate::solver::find_closest_pair_brute_force;
pub use crate::solver::find_closest_pair_divide_and_conquer;
pub use crate::solver::find_closest_pair_optimized;
pub use crate::solver::find_closest_pair_optimized_counted;
pub use crate::solver::{Algorithm, ComparisonCounter, ComparisonObserver};

pub use crate::utils::compare_floats;
pub use crate::utils::generate_random_points;
pub use crate::utils::{Float, GenericError, GenericResult};
pub use crate::utils::{InfoLogger, Timer};
