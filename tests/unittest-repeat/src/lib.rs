//! Exercises repeated suite execution and the accuracy of the runner's
//! execution counters.

#![no_std]

use core::fmt;
use core::fmt::Write as _;

use auklet_unittest::{test_case, test_suite, SuiteReport, Verdict};

/// Name of the registered suite.
pub const SUITE: &str = "testsuite";

/// The case whose counter the teardown reports.
pub const COUNTED_CASE: &str = "test_repeating1";

test_case!(testsuite, fn test_repeating1() -> Verdict {
    Verdict::Pass
});

test_case!(testsuite, fn test_repeating2() -> Verdict {
    Verdict::Pass
});

test_case!(testsuite, fn test_repeating3() -> Verdict {
    Verdict::Pass
});

fn repeat_teardown(report: &mut SuiteReport<'_>) -> fmt::Result {
    // The suite counter is only incremented once this hook has returned,
    // so the execution that just finished is not accounted yet.
    let suite_runs = report.stats().run_count + 1;
    let case_runs = report
        .case_stats(COUNTED_CASE)
        .map_or(0, |stats| stats.run_count);

    writeln!(report, "Test suite executed: {} times.", suite_runs)?;
    writeln!(report, "Test case executed : {} times.", case_runs)?;
    Ok(())
}

test_suite!(testsuite, teardown = repeat_teardown);
