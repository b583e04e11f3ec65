//! Runs the repeat fixture through the harness and checks the counters it
//! reports.

use std::fmt::Write as _;

use auklet_unittest::{registry, Runner};
use unittest_repeat::{COUNTED_CASE, SUITE};

const CASES: [&str; 3] = ["test_repeating1", "test_repeating2", "test_repeating3"];

fn loaded_runner() -> Runner {
    let mut runner = Runner::new();
    runner
        .load_registered()
        .expect("fixture fits the default table capacities");
    runner
}

fn expected_output(repeat: u32) -> String {
    let mut expected = String::new();
    for i in 1..=repeat {
        writeln!(expected, "Test suite executed: {} times.", i).unwrap();
        writeln!(expected, "Test case executed : {} times.", i).unwrap();
    }
    expected
}

#[test]
fn fixture_is_registered() {
    assert!(registry::suite_by_name(SUITE).is_some());
    assert_eq!(registry::cases_of(SUITE).count(), CASES.len());
    for case in CASES {
        assert!(registry::cases_of(SUITE).any(|c| c.name() == case));
    }
}

#[test]
fn single_run_reports_one_execution() {
    let mut out = String::new();
    let mut runner = loaded_runner();

    let summary = runner.run_all(&mut out).expect("fixture runs cleanly");

    assert_eq!(
        out,
        "Test suite executed: 1 times.\nTest case executed : 1 times.\n"
    );
    assert_eq!(summary.executed, 3);
    assert_eq!(summary.passed, 3);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, 0);
}

#[test]
fn five_runs_report_five_executions() {
    let mut out = String::new();
    let mut runner = loaded_runner();
    runner.set_repeat(5);

    let summary = runner.run_all(&mut out).expect("fixture runs cleanly");

    // Every repetition emits the same two lines, with only the counts
    // varying.
    assert_eq!(out, expected_output(5));
    assert!(out.ends_with(
        "Test suite executed: 5 times.\nTest case executed : 5 times.\n"
    ));

    assert_eq!(summary.executed, 15);
    assert_eq!(summary.passed, 15);

    let suite = runner.suite_stats(SUITE).expect("suite is registered");
    assert_eq!(suite.run_count, 5);
    assert_eq!(suite.fail_count, 0);

    for case in CASES {
        let stats = runner.case_stats(SUITE, case).expect("case is registered");
        assert_eq!(stats.run_count, 5);
        assert_eq!(stats.pass_count, 5);
        assert_eq!(stats.fail_count, 0);
    }
}

#[test]
fn run_by_name_matches_run_all() {
    let mut out = String::new();
    let mut runner = loaded_runner();
    runner.set_repeat(3);

    let summary = runner.run_suite(SUITE, &mut out).expect("fixture runs cleanly");

    assert_eq!(out, expected_output(3));
    assert_eq!(summary.executed, 9);
    assert_eq!(summary.passed, 9);
}

#[test]
fn rerun_from_fresh_state_is_identical() {
    let mut first = String::new();
    let mut second = String::new();

    let mut runner = loaded_runner();
    runner.set_repeat(5);
    runner.run_all(&mut first).expect("fixture runs cleanly");

    let mut fresh = loaded_runner();
    fresh.set_repeat(5);
    fresh.run_all(&mut second).expect("fixture runs cleanly");

    assert_eq!(first, second);
    assert_eq!(runner.suite_stats(SUITE), fresh.suite_stats(SUITE));
    assert_eq!(
        runner.case_stats(SUITE, COUNTED_CASE),
        fresh.case_stats(SUITE, COUNTED_CASE)
    );
}
