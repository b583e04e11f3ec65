//! Link-time registration tables.
//!
//! The [`test_suite!`](crate::test_suite) and
//! [`test_case!`](crate::test_case) macros place descriptors into the
//! [distributed slices](linkme) below, which
//! [`Runner::load_registered`](crate::Runner::load_registered) copies into
//! its own tables at startup. The order of elements within a slice is
//! unspecified.

use crate::suite::{Case, Suite};

/// All suites registered through [`test_suite!`](crate::test_suite).
#[linkme::distributed_slice]
pub static SUITES: [Suite] = [..];

/// All cases registered through [`test_case!`](crate::test_case), across
/// all suites.
#[linkme::distributed_slice]
pub static CASES: [Case] = [..];

/// Returns the registered suites.
pub fn suites() -> &'static [Suite] {
    &SUITES
}

/// Returns the registered cases.
pub fn cases() -> &'static [Case] {
    &CASES
}

/// Looks up a registered suite by name.
pub fn suite_by_name(name: &str) -> Option<&'static Suite> {
    SUITES.iter().find(|suite| suite.name() == name)
}

/// Returns the registered cases belonging to the suite named `suite`.
pub fn cases_of(suite: &str) -> impl Iterator<Item = &'static Case> + '_ {
    CASES.iter().filter(move |case| case.suite() == suite)
}
