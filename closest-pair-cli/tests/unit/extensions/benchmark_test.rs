use super::*;
use crate::extensions::config::BenchmarkConfigBuilder;

fn create_config(sizes: Vec<usize>) -> BenchmarkConfigBuilder {
    BenchmarkConfigBuilder::default().with_sizes(sizes).with_seed(5)
}

#[test]
fn can_run_benchmark_for_each_size() {
    let config = create_config(vec![8, 64, 256]).build().unwrap();

    let records = run_benchmark(&config).unwrap();

    assert_eq!(records.iter().map(|record| record.size).collect::<Vec<_>>(), vec![8, 64, 256]);
    records.iter().for_each(|record| {
        assert!(Algorithm::all().into_iter().all(|algorithm| record.duration(algorithm).is_some()));
        assert!(record.comparisons.is_some_and(|comparisons| comparisons > 0));
    });
}

#[test]
fn can_skip_brute_force_above_limit() {
    let config = create_config(vec![50, 100]).with_brute_force_limit(50).build().unwrap();

    let records = run_benchmark(&config).unwrap();

    assert!(records[0].brute_force.is_some());
    assert!(records[1].brute_force.is_none());
    assert!(records[1].optimized.is_some());
    assert!(records[1].divide_and_conquer.is_some());
}

#[test]
fn can_write_table_with_skipped_cells() {
    let records = vec![
        BenchmarkRecord { size: 128, optimized: Some(1), brute_force: Some(12), divide_and_conquer: Some(2), comparisons: Some(300) },
        BenchmarkRecord { size: 262144, optimized: Some(95), brute_force: None, divide_and_conquer: Some(310), comparisons: None },
    ];
    let mut writer = BufWriter::new(Vec::new());

    write_benchmark_table(&mut writer, &records).unwrap();

    let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines[3], format!("{:<8} {:<15} {:<15} {:<15}", "", "(ms)", "(ms)", "(ms)"));
    assert_eq!(lines[5], format!("{:<8} {:<15} {:<15} {:<15}", 128, 1, 12, 2));
    assert_eq!(lines[6], format!("{:<8} {:<15} {:<15} {:<15}", 262144, 95, "---", 310));
}

#[test]
fn can_keep_durations_without_truncation() {
    let millis = u64::MAX as u128 + 1;
    let mut record = BenchmarkRecord::new(4);
    record.set_duration(Algorithm::DivideAndConquer, millis);
    let mut writer = BufWriter::new(Vec::new());

    write_benchmark_table(&mut writer, &[record.clone()]).unwrap();

    assert_eq!(record.duration(Algorithm::DivideAndConquer), Some(millis));
    let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    assert!(output.lines().nth(5).is_some_and(|line| line.trim_end().ends_with(&millis.to_string())));
}

#[test]
fn can_write_json() {
    let records = vec![BenchmarkRecord { size: 16, optimized: Some(0), ..BenchmarkRecord::default() }];
    let mut writer = BufWriter::new(Vec::new());

    write_benchmark_json(&mut writer, &records).unwrap();

    let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["size"], 16);
    assert_eq!(value[0]["optimized"], 0);
    assert!(value[0]["divideAndConquer"].is_null());
}

#[test]
fn can_log_progress() {
    let messages = std::rc::Rc::new(std::cell::RefCell::new(Vec::<String>::new()));
    let messages_copy = messages.clone();
    let config = create_config(vec![20])
        .with_brute_force_limit(10)
        .with_logger(std::sync::Arc::new(move |msg: &str| messages_copy.borrow_mut().push(msg.to_string())))
        .build()
        .unwrap();

    run_benchmark(&config).unwrap();

    let messages = messages.borrow();
    assert_eq!(messages.len(), 4);
    assert!(messages[0].starts_with("generated 20 points in "));
    assert!(messages[1].starts_with("Optimized: "));
    assert_eq!(messages[2], "Brute Force is skipped for 20 points");
    assert!(messages[3].starts_with("Divide & Conquer: "));
}
