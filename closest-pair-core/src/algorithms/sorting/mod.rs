//! Contains an in-place sort of points used by the optimized closest pair algorithm.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/quick_sort_test.rs"]
mod quick_sort_test;

use crate::models::Point;

/// Sorts points in place by `x` coordinate using partition-exchange sort.
///
/// The last element of each range is used as a pivot, so the sort degrades to `O(n²)` on
/// already sorted input. The sort is not stable.
pub fn quick_sort_by_x(points: &mut [Point]) {
    let mut points = points;

    // recurse into the smaller part and iterate over the larger one to keep stack depth bounded
    while points.len() > 1 {
        let pivot_idx = partition_by_x(points);
        let (left, right) = std::mem::take(&mut points).split_at_mut(pivot_idx);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_by_x(left);
            points = right;
        } else {
            quick_sort_by_x(right);
            points = left;
        }
    }
}

/// Moves points with `x` not greater than the pivot's one before the pivot and returns pivot's index.
fn partition_by_x(points: &mut [Point]) -> usize {
    let high = points.len() - 1;
    let pivot = points[high].x();
    let mut store_idx = 0;

    for idx in 0..high {
        if points[idx].x() <= pivot {
            points.swap(store_idx, idx);
            store_idx += 1;
        }
    }

    points.swap(store_idx, high);

    store_idx
}
