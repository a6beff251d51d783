use super::*;
use crate::helpers::models::p;

#[test]
fn can_treat_pair_as_unordered() {
    let pair = ClosestPair::new(p(0., 0.), p(1., 1.));

    assert!(pair.is_same_as(&p(1., 1.), &p(0., 0.)));
    assert!(pair.is_same_as(&p(0., 0.), &p(1., 1.)));
    assert_eq!(pair, ClosestPair::new(p(1., 1.), p(0., 0.)));
    assert!(!pair.is_same_as(&p(0., 0.), &p(1., 2.)));
}

#[test]
fn can_calculate_pair_distance() {
    let pair = ClosestPair::new(p(0., 0.), p(3., 4.));

    assert_eq!(pair.distance(), 5.);
}

#[test]
fn can_format_pair() {
    let pair = ClosestPair::new(p(0., 0.), p(3., 4.));

    assert_eq!(pair.to_string(), "5.000000 between (0.00, 0.00) and (3.00, 4.00)");
}
