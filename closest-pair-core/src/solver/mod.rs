//! The solver module contains closest pair algorithms and a facade to run them uniformly.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::models::{ClosestPair, Point};
use crate::utils::GenericResult;
use serde::{Deserialize, Serialize};

mod brute_force;
pub use self::brute_force::find_closest_pair_brute_force;

mod divide_and_conquer;
pub use self::divide_and_conquer::find_closest_pair_divide_and_conquer;

mod optimized;
pub use self::optimized::{find_closest_pair_optimized, find_closest_pair_optimized_counted};

mod telemetry;
pub use self::telemetry::*;

/// Specifies a closest pair algorithm.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithm {
    /// Sorts points by `x` and scans pairs with pruning by horizontal gap.
    Optimized,
    /// Checks every pair of points.
    BruteForce,
    /// Classical recursive algorithm with a strip merge step.
    DivideAndConquer,
}

impl Algorithm {
    /// Returns all supported algorithms in their reporting order.
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Optimized, Algorithm::BruteForce, Algorithm::DivideAndConquer]
    }

    /// Returns a human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Optimized => "Optimized",
            Algorithm::BruteForce => "Brute Force",
            Algorithm::DivideAndConquer => "Divide & Conquer",
        }
    }

    /// Finds the closest pair within given points. The points are owned by the call, so the
    /// caller's data is never reordered. Only the optimized algorithm reports comparisons to
    /// the `observer`.
    pub fn solve(&self, points: Vec<Point>, observer: &mut dyn ComparisonObserver) -> GenericResult<ClosestPair> {
        match self {
            Algorithm::Optimized => {
                let mut points = points;
                find_closest_pair_optimized(points.as_mut_slice(), observer)
            }
            Algorithm::BruteForce => find_closest_pair_brute_force(points.as_slice()),
            Algorithm::DivideAndConquer => find_closest_pair_divide_and_conquer(points.as_slice()),
        }
    }
}

/// Checks that there are at least two points and all of them have finite coordinates.
pub(crate) fn validate_points(points: &[Point]) -> GenericResult<()> {
    if points.len() < 2 {
        return Err(format!("closest pair requires at least 2 points, got {}", points.len()).into());
    }

    match points.iter().enumerate().find(|(_, point)| !point.is_finite()) {
        Some((idx, point)) => Err(format!("point at index {idx} has non-finite coordinates: {point}").into()),
        None => Ok(()),
    }
}
