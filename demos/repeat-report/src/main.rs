//! Runs the registered test suites on the host and prints the teardown
//! reports, mirroring what a target would emit over its debug console.
//!
//! The repeat count is a build-time tunable; rebuild with
//! `CONFIG_TEST_REPEAT=5` to watch the counters climb.

use std::process::ExitCode;

use auklet_unittest::Runner;

// Linking the fixture crate is what registers its suite.
use unittest_repeat as _;

fn main() -> ExitCode {
    let mut out = String::new();
    let mut runner = Runner::new();

    if let Err(err) = runner.load_registered() {
        eprintln!("cannot load registered tests: {err}");
        return ExitCode::FAILURE;
    }

    let summary = match runner.run_all(&mut out) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("test run aborted: {err}");
            return ExitCode::FAILURE;
        }
    };

    print!("{out}");
    println!(
        "{} executed, {} passed, {} failed, {} skipped",
        summary.executed, summary.passed, summary.failed, summary.skipped
    );

    if summary.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
