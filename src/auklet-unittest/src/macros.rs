/// Declares a test case and registers it with the suite named `$suite`.
///
/// The case body must evaluate to a [`Verdict`](crate::Verdict); returning
/// [`Verdict::Pass`](crate::Verdict::Pass) signals success. The suite does
/// not need to be declared in the same crate, or at all — cases of a suite
/// that is never registered are not executed.
///
/// ```
/// use auklet_unittest::{test_case, Verdict};
///
/// test_case!(timers, fn wraparound_is_handled() -> Verdict {
///     Verdict::Pass
/// });
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! test_case {
    ($suite:ident, fn $case:ident() -> $verdict:ty $body:block $(,)?) => {
        $crate::macro_reexports::paste::paste! {
            fn $case() -> $verdict $body

            #[$crate::macro_reexports::linkme::distributed_slice($crate::registry::CASES)]
            #[linkme(crate = $crate::macro_reexports::linkme)]
            static [<__CASE_ $suite:upper _ $case:upper>]: $crate::Case = $crate::Case::new(
                ::core::stringify!($suite),
                ::core::stringify!($case),
                $case,
            );
        }
    };
}

/// Declares a test suite, with optional lifecycle hooks.
///
/// Hooks are given in the order `setup`, `before`, `after`, `teardown`;
/// each may be omitted. `setup` and `teardown` run once per repetition,
/// `before` and `after` around every case.
///
/// ```
/// use core::fmt::Write as _;
///
/// use auklet_unittest::{test_suite, SuiteReport};
///
/// fn report_runs(report: &mut SuiteReport<'_>) -> core::fmt::Result {
///     let runs = report.stats().run_count;
///     writeln!(report, "finished runs so far: {}", runs)
/// }
///
/// test_suite!(timers, teardown = report_runs);
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! test_suite {
    ($name:ident
        $(, setup = $setup:expr)?
        $(, before = $before:expr)?
        $(, after = $after:expr)?
        $(, teardown = $teardown:expr)?
        $(,)?
    ) => {
        $crate::macro_reexports::paste::paste! {
            #[$crate::macro_reexports::linkme::distributed_slice($crate::registry::SUITES)]
            #[linkme(crate = $crate::macro_reexports::linkme)]
            static [<__SUITE_ $name:upper>]: $crate::Suite = {
                let suite = $crate::Suite::new(::core::stringify!($name));
                $(let suite = suite.with_setup($setup);)?
                $(let suite = suite.with_before($before);)?
                $(let suite = suite.with_after($after);)?
                $(let suite = suite.with_teardown($teardown);)?
                suite
            };
        }
    };
}
