use crate::helpers::solver::{DISTANCE_TOLERANCE, assert_pair, get_min_distance_oracle, solve_with_all};
use crate::models::Point;
use crate::utils::Float;
use proptest::prelude::*;

prop_compose! {
    fn generate_point(bounds: Float)(x in -bounds..bounds, y in -bounds..bounds) -> Point {
        Point::new(x, y)
    }
}

prop_compose! {
    /// Generates points on a small integer grid to get many ties and duplicates.
    fn generate_grid_point(side: i32)(x in 0..side, y in 0..side) -> Point {
        Point::new(x as Float, y as Float)
    }
}

fn check_agreement(points: &[Point]) {
    let expected = get_min_distance_oracle(points);

    solve_with_all(points).into_iter().for_each(|(_, pair)| assert_pair(points, &pair, expected));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn can_agree_on_arbitrary_points(points in prop::collection::vec(generate_point(1000.), 2..200)) {
        check_agreement(&points);
    }

    #[test]
    fn can_agree_on_grid_points_with_ties(points in prop::collection::vec(generate_grid_point(8), 2..120)) {
        check_agreement(&points);
    }

    #[test]
    fn can_agree_on_points_clustered_on_vertical_line(ys in prop::collection::vec(-100. ..100_f64, 2..100), shift in 0. ..1E-3_f64) {
        let points = ys.iter().enumerate().map(|(idx, y)| Point::new(if idx % 2 == 0 { 50. } else { 50. + shift }, *y)).collect::<Vec<_>>();

        let distances = solve_with_all(&points).into_iter().map(|(_, pair)| pair.distance()).collect::<Vec<_>>();

        prop_assert!(distances.windows(2).all(|pair| (pair[0] - pair[1]).abs() < DISTANCE_TOLERANCE));
        prop_assert!((distances[0] - get_min_distance_oracle(&points)).abs() < DISTANCE_TOLERANCE);
    }
}
