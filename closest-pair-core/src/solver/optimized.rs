#[cfg(test)]
#[path = "../../tests/unit/solver/optimized_test.rs"]
mod optimized_test;

use super::{ComparisonCounter, ComparisonObserver, validate_points};
use crate::algorithms::geometry::distance;
use crate::algorithms::sorting::quick_sort_by_x;
use crate::models::{ClosestPair, Point};
use crate::utils::GenericResult;

/// Finds the closest pair by sorting points by `x` and scanning pairs in that order.
///
/// For each point, the scan over the following points stops as soon as the horizontal gap reaches
/// the best distance found so far: no point further in `x` order can be closer.
///
/// NOTE: `points` are sorted in place, pass a copy if the original order matters.
/// Every distance evaluation is reported to `observer`.
pub fn find_closest_pair_optimized(
    points: &mut [Point],
    observer: &mut dyn ComparisonObserver,
) -> GenericResult<ClosestPair> {
    validate_points(points)?;

    let mut best = ClosestPair::new(points[0], points[1]);
    let mut min_distance = best.distance();

    observer.enter();
    quick_sort_by_x(points);

    for i in 0..points.len() {
        for j in i + 1..points.len() {
            // gap is non-negative after sorting, comparing it unsquared avoids overflow
            if points[j].x() - points[i].x() >= min_distance {
                break;
            }

            let distance = distance(&points[i], &points[j]);
            observer.count();

            if distance < min_distance {
                min_distance = distance;
                best = ClosestPair::new(points[i], points[j]);
            }
        }
    }

    observer.exit();

    Ok(best)
}

/// Runs the optimized algorithm and returns the found pair together with the amount of
/// distance evaluations. `points` are sorted in place.
pub fn find_closest_pair_optimized_counted(points: &mut [Point]) -> GenericResult<(ClosestPair, usize)> {
    let mut counter = ComparisonCounter::default();
    let pair = find_closest_pair_optimized(points, &mut counter)?;

    Ok((pair, counter.comparisons()))
}
