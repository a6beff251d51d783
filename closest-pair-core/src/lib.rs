//! A core crate contains algorithms which find the closest pair of points on a plane.
//!
//! Three algorithms are provided:
//!
//! - **optimized**: sorts points by `x` coordinate and scans pairs, pruning the scan once the
//!   horizontal gap alone exceeds the best distance found so far;
//! - **brute force**: a classical exhaustive `O(n²)` scan, used as a ground truth;
//! - **divide and conquer**: a classical `O(n log n)` recursive algorithm with a strip merge step.
//!
//! # Examples
//!
//! ```
//! use closest_pair_core::prelude::*;
//!
//! let points = vec![Point::new(0., 0.), Point::new(3., 4.), Point::new(1., 1.), Point::new(100., 100.)];
//!
//! let pair = find_closest_pair_divide_and_conquer(&points).expect("cannot find closest pair");
//!
//! assert!((pair.distance() - 2_f64.sqrt()).abs() < 1E-9);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
