#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use crate::utils::Float;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Represents an immutable point in 2D space.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    x: Float,
    y: Float,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns X value.
    #[inline]
    pub fn x(&self) -> Float {
        self.x
    }

    /// Returns Y value.
    #[inline]
    pub fn y(&self) -> Float {
        self.y
    }

    /// Computes distance from given point to `other`. Intermediate squares do not overflow.
    #[inline]
    pub fn distance_to_point(&self, other: &Point) -> Float {
        let delta_x = self.x - other.x;
        let delta_y = self.y - other.y;

        delta_x.hypot(delta_y)
    }

    /// Returns true if both coordinates are neither infinite nor `NaN`.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Point {
    fn transmute(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (x, y) = self.transmute();
        x.hash(state);
        y.hash(state);
    }
}

impl Eq for Point {}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.transmute() == other.transmute()
    }
}
