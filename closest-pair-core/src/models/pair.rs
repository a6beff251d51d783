#[cfg(test)]
#[path = "../../tests/unit/models/pair_test.rs"]
mod pair_test;

use crate::models::Point;
use crate::utils::Float;
use std::fmt::{Display, Formatter};

/// An unordered pair of points found by one of closest pair algorithms.
#[derive(Clone, Copy, Debug)]
pub struct ClosestPair {
    first: Point,
    second: Point,
}

impl ClosestPair {
    /// Creates a new instance of `ClosestPair`.
    pub fn new(first: Point, second: Point) -> Self {
        Self { first, second }
    }

    /// Returns both points of the pair.
    pub fn points(&self) -> (Point, Point) {
        (self.first, self.second)
    }

    /// Returns the distance between the points of the pair.
    pub fn distance(&self) -> Float {
        self.first.distance_to_point(&self.second)
    }

    /// Checks whether the pair consists of given points regardless of their order.
    pub fn is_same_as(&self, a: &Point, b: &Point) -> bool {
        (self.first == *a && self.second == *b) || (self.first == *b && self.second == *a)
    }
}

impl PartialEq for ClosestPair {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_as(&other.first, &other.second)
    }
}

impl Display for ClosestPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6} between {} and {}", self.distance(), self.first, self.second)
    }
}
