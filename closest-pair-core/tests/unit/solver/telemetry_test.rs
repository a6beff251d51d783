use super::*;

#[test]
fn can_count_and_reset_comparisons() {
    let mut counter = ComparisonCounter::default();

    counter.enter();
    (0..5).for_each(|_| counter.count());
    counter.exit();
    assert_eq!(counter.comparisons(), 5);

    counter.enter();
    assert_eq!(counter.comparisons(), 0);
}
