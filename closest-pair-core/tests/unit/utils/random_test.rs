use super::*;

#[test]
fn can_generate_same_points_with_same_seed() {
    let first = generate_random_points(64, 42, 1000.);
    let second = generate_random_points(64, 42, 1000.);

    assert_eq!(first, second);
}

#[test]
fn can_generate_different_points_with_different_seed() {
    let first = generate_random_points(64, 42, 1000.);
    let second = generate_random_points(64, 7, 1000.);

    assert_ne!(first, second);
}

#[test]
fn can_generate_points_within_bounds() {
    let points = generate_random_points(1000, 1, 10.);

    assert_eq!(points.len(), 1000);
    assert!(points.iter().all(|point| (0. ..10.).contains(&point.x()) && (0. ..10.).contains(&point.y())));
}
