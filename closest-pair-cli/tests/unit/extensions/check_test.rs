use super::*;
use crate::extensions::config::BenchmarkConfigBuilder;

#[test]
fn can_run_check_on_random_points() {
    let config = BenchmarkConfigBuilder::default().with_check_size(100).build().unwrap();

    let report = run_check(&config).unwrap();

    assert!(report.is_consistent);
    assert_eq!(report.results.iter().map(|(algorithm, _)| *algorithm).collect::<Vec<_>>(), Algorithm::all());
}

#[test]
fn can_check_simple_scenario() {
    let points = vec![Point::new(0., 0.), Point::new(3., 4.), Point::new(1., 1.), Point::new(100., 100.)];

    let report = check_points(&points, &Algorithm::all()).unwrap();

    assert!(report.is_consistent);
    report.results.iter().for_each(|(_, pair)| {
        assert!(pair.is_same_as(&Point::new(0., 0.), &Point::new(1., 1.)));
    });
}

#[test]
fn can_propagate_invalid_input_error() {
    let result = check_points(&[Point::new(0., 0.)], &Algorithm::all());

    assert_eq!(result.err().map(String::from), Some("closest pair requires at least 2 points, got 1".to_string()));
}

#[test]
fn can_write_report() {
    let pair = ClosestPair::new(Point::new(0., 0.), Point::new(1., 1.));
    let report = CheckReport {
        results: vec![(Algorithm::Optimized, pair), (Algorithm::DivideAndConquer, pair)],
        is_consistent: false,
    };
    let mut writer = BufWriter::new(Vec::new());

    write_check_report(&mut writer, &report).unwrap();

    let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    assert_eq!(
        output,
        "=== CORRECTNESS CHECK ===\n\
         Optimized: 1.414214 between (0.00, 0.00) and (1.00, 1.00)\n\
         Divide & Conquer: 1.414214 between (0.00, 0.00) and (1.00, 1.00)\n\
         All algorithms produce the same result: NO\n"
    );
}
