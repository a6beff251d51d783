#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::models::Point;
use crate::utils::Float;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Generates `size` points with coordinates uniformly distributed on `[0, bounds)`.
/// The same `seed` always produces the same points.
pub fn generate_random_points(size: usize, seed: u64, bounds: Float) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..size).map(|_| Point::new(rng.r#gen::<Float>() * bounds, rng.r#gen::<Float>() * bounds)).collect()
}
