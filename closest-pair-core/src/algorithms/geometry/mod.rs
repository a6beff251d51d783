//! Geometric primitives shared by closest pair algorithms.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/geometry_test.rs"]
mod geometry_test;

use crate::models::Point;
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Calculates euclidean distance between two points. Coincident points have zero distance.
#[inline]
pub fn distance(a: &Point, b: &Point) -> Float {
    a.distance_to_point(b)
}

/// Orders points by their `x` coordinate.
pub fn compare_by_x(a: &Point, b: &Point) -> Ordering {
    compare_floats(a.x(), b.x())
}

/// Orders points by their `y` coordinate.
pub fn compare_by_y(a: &Point, b: &Point) -> Ordering {
    compare_floats(a.y(), b.y())
}
