//! # Self-Test Module
//!
//! A small bookkeeping harness for hand-written self tests. A run is a
//! sequence of named **sections**; each section holds any number of
//! checks, and each check ends in [`SelfTest::success`] or
//! [`SelfTest::failed`]. At the end [`SelfTest::finish`] prints a summary
//! and returns the process exit status.
//!
//! ## Filters
//!
//! - The **class** filter decides which sections run. Sections marked
//!   [`Class::Manual`] need someone watching and are skipped by an
//!   [`Class::Auto`] run (and vice versa). [`Class::All`] on either side
//!   always matches.
//! - The **level** decides what reaches the report sink:
//!   [`Level::Quiet`] writes nothing, [`Level::Normal`] writes section
//!   names, failures and the summary, [`Level::All`] writes every check.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──init──▶ Ready ──start──▶ SectionOpen
//!                           ▲                  │
//!                           └──────end─────────┘
//!                         Ready ──finish──▶ Finished
//! ```
//!
//! Calls that do not fit the current state are ignored and logged as
//! warnings; they never panic and never touch the counters. A failed
//! check is data, not an error: the run continues and only the exit
//! status reports it.
//!
//! ## Example
//!
//! ```rust
//! use pk_support::{Class, Level, SelfTest, SelfTestConfig};
//!
//! let mut test = SelfTest::with_sink(Vec::new());
//! test.init(SelfTestConfig { class: Class::Auto, level: Level::All });
//!
//! if test.start("PkFiles", Class::Auto) {
//!     test.title("get package id");
//!     test.success(None);
//!     test.end();
//! }
//! assert_eq!(test.finish(), 0);
//! ```

// ------------------------------------------------------------------------------------------------
// Unit tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Includes
// ------------------------------------------------------------------------------------------------

mod config;

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, error, warn};

pub use config::{CLASS_ENV, LEVEL_ENV, SelfTestConfig, SelfTestError};

// ------------------------------------------------------------------------------------------------
// Constants
// ------------------------------------------------------------------------------------------------

/// Exit status when every check in the run succeeded.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status when at least one check failed.
pub const EXIT_FAILURE: i32 = 1;

// ------------------------------------------------------------------------------------------------
// Filters
// ------------------------------------------------------------------------------------------------

/// Which kind of section a run executes, or which kind a section is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// Matches every section.
    All,
    /// Runs unattended.
    Auto,
    /// Needs a human observer.
    Manual,
}

impl Class {
    /// Returns `true` if a run filtered by `self` executes a section of
    /// class `section`.
    pub fn admits(self, section: Class) -> bool {
        self == Class::All || section == Class::All || self == section
    }
}

/// Report verbosity, from least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Writes nothing.
    Quiet,
    /// Section names, failures and the summary.
    Normal,
    /// Every check, passing or not.
    All,
}

// ------------------------------------------------------------------------------------------------
// Run state
// ------------------------------------------------------------------------------------------------

/// Where a [`SelfTest`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Ready,
    SectionOpen,
    Finished,
}

/// A failed check, kept for the final summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Section the check belonged to.
    pub section: String,
    /// 1-based check number within the run.
    pub check: u32,
    /// Optional detail passed to [`SelfTest::failed`].
    pub detail: Option<String>,
}

/// Counters of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: u32,
    pub succeeded: u32,
}

impl Summary {
    /// Checks that did not succeed.
    pub fn failed(&self) -> u32 {
        self.total.saturating_sub(self.succeeded)
    }

    /// `true` when every check succeeded, including an empty run.
    pub fn passed(&self) -> bool {
        self.succeeded == self.total
    }

    /// [`EXIT_SUCCESS`] or [`EXIT_FAILURE`].
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Harness
// ------------------------------------------------------------------------------------------------

/// Counts and reports the checks of one self-test run.
///
/// Report lines go to `W`, standard output by default. The harness is
/// owned by the run; pass it by `&mut` to each test suite.
pub struct SelfTest<W: Write = io::Stdout> {
    total: u32,
    succeeded: u32,
    started: bool,
    class: Class,
    level: Level,
    name: Option<String>,
    state: State,

    /// Whether the open section has recorded a failure.
    section_failed: bool,
    failures: Vec<Failure>,
    sink: W,
}

impl<W: Write> fmt::Debug for SelfTest<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelfTest")
            .field("state", &self.state)
            .field("section", &self.name)
            .field("total", &self.total)
            .field("succeeded", &self.succeeded)
            .field("class", &self.class)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl SelfTest {
    /// Creates an uninitialized harness reporting to standard output.
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl Default for SelfTest {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> SelfTest<W> {
    /// Creates an uninitialized harness reporting to `sink`.
    pub fn with_sink(sink: W) -> Self {
        let defaults = SelfTestConfig::default();
        Self {
            total: 0,
            succeeded: 0,
            started: false,
            class: defaults.class,
            level: defaults.level,
            name: None,
            state: State::Uninitialized,
            section_failed: false,
            failures: Vec::new(),
            sink,
        }
    }

    // --------------------------------------------------------------------------------------------
    // Lifecycle
    // --------------------------------------------------------------------------------------------

    /// Resets the counters and applies `config`. May be called again to
    /// begin a fresh run on the same sink.
    pub fn init(&mut self, config: SelfTestConfig) {
        if self.state == State::SectionOpen {
            warn!(section = ?self.name, "init discards an open section");
        }
        self.total = 0;
        self.succeeded = 0;
        self.started = false;
        self.name = None;
        self.section_failed = false;
        self.failures.clear();
        self.class = config.class;
        self.level = config.level;
        self.state = State::Ready;
        debug!(class = ?self.class, level = ?self.level, "self-test run initialized");
    }

    /// Opens section `name` of class `class`.
    ///
    /// Returns `false` if the class filter excludes the section, or if
    /// the harness is not ready for a new section. The caller must skip
    /// the section's checks in that case.
    pub fn start(&mut self, name: &str, class: Class) -> bool {
        match self.state {
            State::Ready => {}
            State::SectionOpen => {
                warn!(open = ?self.name, requested = name, "section already open, not starting");
                return false;
            }
            state => {
                warn!(?state, requested = name, "cannot start a section outside a run");
                return false;
            }
        }

        if !self.class.admits(class) {
            debug!(section = name, ?class, filter = ?self.class, "section skipped by class filter");
            return false;
        }

        self.name = Some(name.to_owned());
        self.started = true;
        self.section_failed = false;
        self.state = State::SectionOpen;

        if self.level == Level::Normal {
            self.emit(format_args!("{name}..."));
        }
        debug!(section = name, "section started");
        true
    }

    /// Closes the open section.
    pub fn end(&mut self) {
        if self.state != State::SectionOpen {
            warn!(state = ?self.state, "end called without an open section");
            return;
        }

        if self.level == Level::Normal && !self.section_failed {
            self.emit(format_args!("OK\n"));
        }
        debug!(section = ?self.name, "section ended");

        self.started = false;
        self.name = None;
        self.state = State::Ready;
    }

    /// Writes the summary and returns the exit status for the run.
    ///
    /// An open section is closed first. Once finished, the harness
    /// ignores everything except [`init`](Self::init).
    pub fn finish(&mut self) -> i32 {
        match self.state {
            State::Ready => {}
            State::SectionOpen => {
                warn!(section = ?self.name, "finish closes a section left open");
                self.end();
            }
            state => {
                warn!(?state, "finish called outside a run");
                return self.summary().exit_code();
            }
        }

        let summary = self.summary();
        if self.level > Level::Quiet {
            self.emit(format_args!(
                "test passes ({}/{}) : ",
                summary.succeeded, summary.total
            ));
            if summary.passed() {
                self.emit(format_args!("ALL OK\n"));
            } else {
                self.emit(format_args!("{} FAILURE(S)\n", summary.failed()));
            }
            self.report_failures();
        }

        self.state = State::Finished;
        debug!(total = summary.total, succeeded = summary.succeeded, "self-test run finished");
        summary.exit_code()
    }

    // --------------------------------------------------------------------------------------------
    // Checks
    // --------------------------------------------------------------------------------------------

    /// Announces the next check. Counts nothing.
    pub fn title(&mut self, message: impl fmt::Display) {
        if !self.require_open("title") {
            return;
        }
        if self.level == Level::All {
            let check = self.total + 1;
            let section = self.name.as_deref().unwrap_or_default();
            let line = format!("> check #{check}\t{section}: \t{message}...");
            self.emit(format_args!("{line}"));
        }
    }

    /// Records a passing check.
    pub fn success(&mut self, detail: Option<&str>) {
        if !self.require_open("success") {
            return;
        }
        self.total += 1;
        self.succeeded += 1;

        if self.level == Level::All {
            match detail {
                Some(detail) => self.emit(format_args!("...OK [{detail}]\n")),
                None => self.emit(format_args!("...OK\n")),
            }
        }
    }

    /// Records a failing check. The run carries on.
    pub fn failed(&mut self, detail: Option<&str>) {
        if !self.require_open("failed") {
            return;
        }
        self.total += 1;
        self.section_failed = true;

        let section = self.name.clone().unwrap_or_default();
        debug!(%section, check = self.total, ?detail, "check failed");
        self.failures.push(Failure {
            section,
            check: self.total,
            detail: detail.map(str::to_owned),
        });

        if self.level >= Level::Normal {
            match detail {
                Some(detail) => self.emit(format_args!("FAILED [{detail}]\n")),
                None => self.emit(format_args!("FAILED\n")),
            }
        }
    }

    // --------------------------------------------------------------------------------------------
    // Accessors
    // --------------------------------------------------------------------------------------------

    /// Checks attempted so far.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Checks that passed so far.
    pub fn succeeded(&self) -> u32 {
        self.succeeded
    }

    /// `true` while a section is open.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Name of the open section.
    pub fn section(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Active class filter.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Active report verbosity.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Failed checks so far, in the order they were recorded.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Snapshot of the counters.
    pub fn summary(&self) -> Summary {
        Summary {
            total: self.total,
            succeeded: self.succeeded,
        }
    }

    /// The report sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consumes the harness and returns its report sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    // --------------------------------------------------------------------------------------------
    // Internal helpers
    // --------------------------------------------------------------------------------------------

    /// Returns `true` if a section is open; otherwise logs that `op` was
    /// ignored.
    fn require_open(&self, op: &'static str) -> bool {
        if self.state == State::SectionOpen {
            return true;
        }
        warn!(op, state = ?self.state, "check outside an open section ignored");
        false
    }

    fn report_failures(&mut self) {
        let lines: Vec<String> = self
            .failures
            .iter()
            .map(|failure| match &failure.detail {
                Some(detail) => format!(
                    "  check #{} in {} failed [{}]\n",
                    failure.check, failure.section, detail
                ),
                None => format!("  check #{} in {} failed\n", failure.check, failure.section),
            })
            .collect();
        for line in lines {
            self.emit(format_args!("{line}"));
        }
    }

    /// Writes to the sink. A broken sink is logged, never fatal.
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.sink.write_fmt(args).and_then(|()| self.sink.flush()) {
            error!("self-test report write failed: {e}");
        }
    }
}
