use core::fmt;

use crate::runner::SuiteReport;

/// Outcome reported by a test case function.
///
/// Returning [`Verdict::Pass`] is how a case signals success to the
/// runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// The case succeeded.
    Pass,
    /// The case failed.
    Fail,
    /// The case was not applicable and counts as neither pass nor fail.
    Skip,
}

/// A test case function.
pub type CaseFn = fn() -> Verdict;

/// Suite lifecycle hook (`setup`, `before`, `after`).
pub type HookFn = fn();

/// Suite teardown hook.
///
/// Invoked after the cases of each repetition, with a [`SuiteReport`]
/// through which the hook can read the suite's counters and write
/// diagnostic output.
pub type TeardownFn = fn(&mut SuiteReport<'_>) -> fmt::Result;

/// A named test case, associated with its suite by name.
pub struct Case {
    suite: &'static str,
    name: &'static str,
    run: CaseFn,
}

impl Case {
    pub const fn new(suite: &'static str, name: &'static str, run: CaseFn) -> Self {
        Self { suite, name, run }
    }

    /// Name of the suite this case belongs to.
    pub fn suite(&self) -> &'static str {
        self.suite
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn run(&self) -> Verdict {
        (self.run)()
    }
}

/// A named group of test cases sharing lifecycle hooks.
///
/// Suites are built in const context, hook by hook:
///
/// ```
/// use auklet_unittest::Suite;
///
/// fn ready() {}
///
/// static SUITE: Suite = Suite::new("timers").with_setup(ready);
/// ```
///
/// Cases are not part of the descriptor; they reference their suite by
/// name (see [`Case`]).
pub struct Suite {
    name: &'static str,
    setup: Option<HookFn>,
    before: Option<HookFn>,
    after: Option<HookFn>,
    teardown: Option<TeardownFn>,
}

impl Suite {
    /// Creates a suite descriptor with no hooks.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            setup: None,
            before: None,
            after: None,
            teardown: None,
        }
    }

    /// Hook run once per repetition, before the first case.
    pub const fn with_setup(mut self, f: HookFn) -> Self {
        self.setup = Some(f);
        self
    }

    /// Hook run before every case.
    pub const fn with_before(mut self, f: HookFn) -> Self {
        self.before = Some(f);
        self
    }

    /// Hook run after every case.
    pub const fn with_after(mut self, f: HookFn) -> Self {
        self.after = Some(f);
        self
    }

    /// Hook run once per repetition, after the last case.
    pub const fn with_teardown(mut self, f: TeardownFn) -> Self {
        self.teardown = Some(f);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn setup(&self) -> Option<HookFn> {
        self.setup
    }

    pub(crate) fn before(&self) -> Option<HookFn> {
        self.before
    }

    pub(crate) fn after(&self) -> Option<HookFn> {
        self.after
    }

    pub(crate) fn teardown(&self) -> Option<TeardownFn> {
        self.teardown
    }
}
