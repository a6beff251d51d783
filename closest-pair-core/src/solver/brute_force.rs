#[cfg(test)]
#[path = "../../tests/unit/solver/brute_force_test.rs"]
mod brute_force_test;

use super::validate_points;
use crate::algorithms::geometry::distance;
use crate::models::{ClosestPair, Point};
use crate::utils::GenericResult;

/// Finds the closest pair by checking every unordered pair of points. Input is not modified.
pub fn find_closest_pair_brute_force(points: &[Point]) -> GenericResult<ClosestPair> {
    validate_points(points)?;

    Ok(closest_pair_exhaustive(points))
}

/// Scans all pairs starting from the first two points. Expects at least two points.
pub(crate) fn closest_pair_exhaustive(points: &[Point]) -> ClosestPair {
    let mut best = ClosestPair::new(points[0], points[1]);
    let mut min_distance = best.distance();

    for (i, first) in points.iter().enumerate() {
        for second in &points[i + 1..] {
            let distance = distance(first, second);
            if distance < min_distance {
                min_distance = distance;
                best = ClosestPair::new(*first, *second);
            }
        }
    }

    best
}
