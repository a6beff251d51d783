//! Contains the data model: points on a plane and a pair of the closest points.

mod point;
pub use self::point::Point;

mod pair;
pub use self::pair::ClosestPair;
