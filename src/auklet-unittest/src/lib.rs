//! On-target unit-test harness of the auklet framework.
//!
//! Test cases and suites are declared with the [`test_case!`] and
//! [`test_suite!`] macros, which place descriptors into link-time
//! [registration tables](registry). A [`Runner`] loads those tables,
//! executes every suite a configurable number of times and maintains
//! per-suite and per-case execution counters that suite teardown hooks can
//! inspect and report.
//!
//! The runner produces no output of its own. Everything a hook writes goes
//! through the [`core::fmt::Write`] sink passed to [`Runner::run_all`], so
//! the same fixture runs against a semihosting console on a target and
//! against a plain `String` in host tests.

#![cfg_attr(not(test), no_std)]

mod macros;
mod runner;
mod stats;
mod suite;

pub mod registry;

pub use runner::{Error, RunSummary, Runner, SuiteReport};
pub use stats::{CaseStats, SuiteStats};
pub use suite::{Case, CaseFn, HookFn, Suite, TeardownFn, Verdict};

/// Number of test suites a [`Runner`] can hold.
pub const SUITES_NUMOF: usize = auklet_utils::usize_from_env_or!(
    "CONFIG_TEST_SUITES_MAX",
    8,
    "maximum number of registered test suites"
);

/// Number of test cases a [`Runner`] can hold, across all suites.
pub const CASES_NUMOF: usize = auklet_utils::usize_from_env_or!(
    "CONFIG_TEST_CASES_MAX",
    32,
    "maximum number of registered test cases"
);

/// Default number of times a [`Runner`] executes each suite.
pub const REPEAT_DEFAULT: u32 = auklet_utils::u32_from_env_or!(
    "CONFIG_TEST_REPEAT",
    1,
    "number of times each test suite is executed"
);

#[doc(hidden)]
pub mod macro_reexports {
    // Used by the registration macros.
    pub use linkme;
    pub use paste;
}
