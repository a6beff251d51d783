#[cfg(test)]
#[path = "../../tests/unit/solver/divide_and_conquer_test.rs"]
mod divide_and_conquer_test;

use super::brute_force::closest_pair_exhaustive;
use super::validate_points;
use crate::algorithms::geometry::{compare_by_x, compare_by_y, distance};
use crate::models::{ClosestPair, Point};
use crate::utils::GenericResult;

/// Ranges with this amount of points or fewer are solved by exhaustive search.
const BASE_CASE_SIZE: usize = 4;

/// Finds the closest pair using the classical `O(n log n)` divide and conquer algorithm.
/// Input is not modified: the algorithm works on its own sorted copies.
pub fn find_closest_pair_divide_and_conquer(points: &[Point]) -> GenericResult<ClosestPair> {
    validate_points(points)?;

    let mut sorted_by_x = points.to_vec();
    sorted_by_x.sort_by(compare_by_x);

    let mut sorted_by_y = points.to_vec();
    sorted_by_y.sort_by(compare_by_y);

    let mut solver = DivideAndConquer { sorted_by_x: sorted_by_x.as_slice(), buffers: Vec::default() };

    Ok(solver.solve(sorted_by_y.as_slice(), 0, points.len() - 1, 0))
}

struct DivideAndConquer<'a> {
    sorted_by_x: &'a [Point],
    /// Scratch buffers, one per recursion level, reused by all calls on the same level.
    buffers: Vec<Vec<Point>>,
}

impl DivideAndConquer<'_> {
    /// Solves the problem on `[left, right]` range of points sorted by `x`. `sorted_by_y` holds
    /// the points visible on this level ordered by `y`.
    fn solve(&mut self, sorted_by_y: &[Point], left: usize, right: usize, level: usize) -> ClosestPair {
        if right - left < BASE_CASE_SIZE {
            return closest_pair_exhaustive(&self.sorted_by_x[left..=right]);
        }

        let mid = (left + right) / 2;
        let mid_x = self.sorted_by_x[mid].x();

        // ties on the split line go to the left half, y order is preserved in both halves
        let mut buffer = self.take_buffer(level);
        buffer.extend(sorted_by_y.iter().filter(|point| point.x() <= mid_x));
        let left_size = buffer.len();
        buffer.extend(sorted_by_y.iter().filter(|point| point.x() > mid_x));

        let left_pair = self.solve(&buffer[..left_size], left, mid, level + 1);
        let right_pair = self.solve(&buffer[left_size..], mid + 1, right, level + 1);

        let (left_distance, right_distance) = (left_pair.distance(), right_pair.distance());
        let (mut best, mut min_distance) =
            if left_distance <= right_distance { (left_pair, left_distance) } else { (right_pair, right_distance) };

        buffer.clear();
        buffer.extend(sorted_by_y.iter().filter(|point| (point.x() - mid_x).abs() < min_distance));

        let strip = buffer.as_slice();
        for (i, first) in strip.iter().enumerate() {
            for second in &strip[i + 1..] {
                if second.y() - first.y() >= min_distance {
                    break;
                }

                let distance = distance(first, second);
                if distance < min_distance {
                    min_distance = distance;
                    best = ClosestPair::new(*first, *second);
                }
            }
        }

        self.buffers[level] = buffer;

        best
    }

    fn take_buffer(&mut self, level: usize) -> Vec<Point> {
        if self.buffers.len() <= level {
            self.buffers.resize_with(level + 1, Vec::default);
        }

        let mut buffer = std::mem::take(&mut self.buffers[level]);
        buffer.clear();

        buffer
    }
}
