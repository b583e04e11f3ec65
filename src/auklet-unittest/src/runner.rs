//! Repeat-capable execution of test suites.

use core::fmt;

use heapless::Vec;

use crate::registry;
use crate::stats::{CaseStats, SuiteStats};
use crate::suite::{Case, Suite, Verdict};
use crate::{CASES_NUMOF, REPEAT_DEFAULT, SUITES_NUMOF};

/// Errors reported by the [`Runner`].
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The configured repeat count is zero.
    InvalidRepeat,
    /// More suites were added than fit the runner's table.
    TooManySuites,
    /// More cases were added than fit the runner's table.
    TooManyCases,
    /// The requested suite is not in the runner's table.
    UnknownSuite,
    /// Writing to the output sink failed.
    Output,
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Output
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRepeat => write!(f, "repeat count must be at least 1"),
            Self::TooManySuites => write!(f, "suite table is full"),
            Self::TooManyCases => write!(f, "case table is full"),
            Self::UnknownSuite => write!(f, "no such suite"),
            Self::Output => write!(f, "output sink error"),
        }
    }
}

impl core::error::Error for Error {}

/// Case totals over one [`Runner::run_all`] or [`Runner::run_suite`]
/// invocation, across all repetitions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunSummary {
    /// Case executions.
    pub executed: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
}

struct SuiteRecord {
    suite: &'static Suite,
    stats: SuiteStats,
}

struct CaseRecord {
    case: &'static Case,
    stats: CaseStats,
}

/// Read-only view of a suite's counters, passed to teardown hooks.
///
/// Implements [`fmt::Write`] by forwarding to the sink the runner was
/// invoked with, so hooks report through the same channel as everything
/// else.
pub struct SuiteReport<'a> {
    suite: &'static str,
    stats: &'a SuiteStats,
    cases: &'a [CaseRecord],
    out: &'a mut dyn fmt::Write,
}

impl SuiteReport<'_> {
    /// Name of the suite this repetition belongs to.
    pub fn suite_name(&self) -> &'static str {
        self.suite
    }

    /// The suite's counters.
    ///
    /// The repetition that is currently tearing down is not accounted
    /// yet; see [`SuiteStats::run_count`].
    pub fn stats(&self) -> &SuiteStats {
        self.stats
    }

    /// Counters of this suite's case named `case`.
    pub fn case_stats(&self, case: &str) -> Option<&CaseStats> {
        self.cases
            .iter()
            .find(|record| record.case.suite() == self.suite && record.case.name() == case)
            .map(|record| &record.stats)
    }
}

impl fmt::Write for SuiteReport<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}

/// Executes test suites and owns all execution counters.
///
/// Each suite in the runner's table is executed [`Runner::repeat`] times;
/// one execution runs the suite's `setup` hook, then every case (wrapped
/// in the `before`/`after` hooks), then the `teardown` hook.
///
/// Table capacities are fixed at build time ([`SUITES_NUMOF`],
/// [`CASES_NUMOF`]).
pub struct Runner {
    repeat: u32,
    suites: Vec<SuiteRecord, SUITES_NUMOF>,
    cases: Vec<CaseRecord, CASES_NUMOF>,
}

impl Runner {
    /// Creates an empty runner with the build-time default repeat count.
    pub const fn new() -> Self {
        Self {
            repeat: REPEAT_DEFAULT,
            suites: Vec::new(),
            cases: Vec::new(),
        }
    }

    /// Sets how many times each suite is executed.
    ///
    /// A count of zero is rejected when running, not here.
    pub fn set_repeat(&mut self, repeat: u32) {
        self.repeat = repeat;
    }

    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    /// Adds a suite to the runner's table.
    pub fn add_suite(&mut self, suite: &'static Suite) -> Result<(), Error> {
        self.suites
            .push(SuiteRecord {
                suite,
                stats: SuiteStats::new(),
            })
            .map_err(|_| Error::TooManySuites)
    }

    /// Adds a case to the runner's table.
    ///
    /// Cases whose suite never gets added are kept but not executed.
    pub fn add_case(&mut self, case: &'static Case) -> Result<(), Error> {
        self.cases
            .push(CaseRecord {
                case,
                stats: CaseStats::new(),
            })
            .map_err(|_| Error::TooManyCases)
    }

    /// Loads every suite and case registered at link time.
    pub fn load_registered(&mut self) -> Result<(), Error> {
        for suite in registry::suites() {
            self.add_suite(suite)?;
        }
        for case in registry::cases() {
            self.add_case(case)?;
        }
        Ok(())
    }

    /// Counters of the suite named `name`, if in the table.
    pub fn suite_stats(&self, name: &str) -> Option<&SuiteStats> {
        self.suites
            .iter()
            .find(|record| record.suite.name() == name)
            .map(|record| &record.stats)
    }

    /// Counters of case `case` in suite `suite`, if in the table.
    pub fn case_stats(&self, suite: &str, case: &str) -> Option<&CaseStats> {
        self.cases
            .iter()
            .find(|record| record.case.suite() == suite && record.case.name() == case)
            .map(|record| &record.stats)
    }

    /// Executes every suite in the table [`Runner::repeat`] times.
    pub fn run_all(&mut self, out: &mut dyn fmt::Write) -> Result<RunSummary, Error> {
        if self.repeat == 0 {
            return Err(Error::InvalidRepeat);
        }
        let mut summary = RunSummary::default();
        for idx in 0..self.suites.len() {
            self.run_repeated(idx, out, &mut summary)?;
        }
        Ok(summary)
    }

    /// Executes the suite named `name` [`Runner::repeat`] times.
    pub fn run_suite(&mut self, name: &str, out: &mut dyn fmt::Write) -> Result<RunSummary, Error> {
        if self.repeat == 0 {
            return Err(Error::InvalidRepeat);
        }
        let idx = self
            .suites
            .iter()
            .position(|record| record.suite.name() == name)
            .ok_or(Error::UnknownSuite)?;
        let mut summary = RunSummary::default();
        self.run_repeated(idx, out, &mut summary)?;
        Ok(summary)
    }

    fn run_repeated(
        &mut self,
        idx: usize,
        out: &mut dyn fmt::Write,
        summary: &mut RunSummary,
    ) -> Result<(), Error> {
        for _ in 0..self.repeat {
            self.run_once(idx, out, summary)?;
        }
        Ok(())
    }

    /// One full execution of the suite at `idx`.
    fn run_once(
        &mut self,
        idx: usize,
        out: &mut dyn fmt::Write,
        summary: &mut RunSummary,
    ) -> Result<(), Error> {
        let suite = match self.suites.get(idx) {
            Some(record) => record.suite,
            None => return Ok(()),
        };

        if let Some(setup) = suite.setup() {
            setup();
        }

        let mut failed = false;
        let mut skipped = false;
        for record in self
            .cases
            .iter_mut()
            .filter(|record| record.case.suite() == suite.name())
        {
            if let Some(before) = suite.before() {
                before();
            }

            let verdict = record.case.run();
            record.stats.run_count += 1;
            summary.executed += 1;
            match verdict {
                Verdict::Pass => {
                    record.stats.pass_count += 1;
                    summary.passed += 1;
                }
                Verdict::Fail => {
                    record.stats.fail_count += 1;
                    summary.failed += 1;
                    failed = true;
                }
                Verdict::Skip => {
                    record.stats.skip_count += 1;
                    summary.skipped += 1;
                    skipped = true;
                }
            }

            if let Some(after) = suite.after() {
                after();
            }
        }

        if let Some(teardown) = suite.teardown() {
            let stats = match self.suites.get(idx) {
                Some(record) => &record.stats,
                None => return Ok(()),
            };
            let mut report = SuiteReport {
                suite: suite.name(),
                stats,
                cases: &self.cases,
                out,
            };
            teardown(&mut report)?;
        }

        // The run counter is only bumped once the teardown hook has
        // returned. Hooks observe the count of previously finished
        // executions.
        if let Some(record) = self.suites.get_mut(idx) {
            record.stats.run_count += 1;
            if failed {
                record.stats.fail_count += 1;
            }
            if skipped {
                record.stats.skip_count += 1;
            }
        }
        Ok(())
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
