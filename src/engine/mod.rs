//! Run orchestration for the retention engine.
//!
//! One engine owns the static defaults and the single-flight rule: at most
//! one scan may be in flight per engine instance. Entry into a run goes
//! through a compare-and-swap on an Idle/Running state machine; a run
//! requested while another is active is rejected with a warning, not queued
//! and not an error. Whatever happens during a run (config rejection, entry
//! errors, completion), the engine returns to Idle.
//!
//! A run resolves the policy, compiles the matchers, and builds the age
//! classifier before touching the filesystem, so every configuration problem
//! surfaces as a `ConfigError` with no I/O performed.


use crate::age::AgeClassifier;
use crate::config::Config;
use crate::error::Result;
use crate::pattern::PatternSet;
use crate::policy::{RetentionPolicy, RetentionRequest};
use crate::report::{RetentionReport, ScanReport};
use crate::sink::{Sink, StderrSink};
use crate::walker::TreeWalker;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::SystemTime;

const IDLE: u8 = 0;
const RUNNING: u8 = 1;

/// Outcome of a run request.
#[derive(Debug)]
pub enum RunOutcome {
    /// The scan ran to completion.
    Completed(RetentionReport),
    /// Another scan was in flight; this request was dropped (not queued).
    Rejected,
}

impl RunOutcome {
    /// The report, if the run completed.
    pub fn report(self) -> Option<RetentionReport> {
        match self {
            RunOutcome::Completed(report) => Some(report),
            RunOutcome::Rejected => None,
        }
    }
}

/// Orchestrates one scan per request: policy resolution, matcher and
/// classifier construction, the walk, and report rendering.
pub struct RetentionEngine {
    defaults: Config,
    state: AtomicU8,
    sink: Arc<dyn Sink>,
}

impl RetentionEngine {
    /// Engine with the given static defaults, reporting to stderr.
    pub fn new(defaults: Config) -> Self {
        Self::with_sink(defaults, Arc::new(StderrSink))
    }

    /// Engine reporting errors and warnings to a custom sink.
    pub fn with_sink(defaults: Config, sink: Arc<dyn Sink>) -> Self {
        Self {
            defaults,
            state: AtomicU8::new(IDLE),
            sink,
        }
    }

    /// Execute one retention scan for `request`.
    ///
    /// Request fields override the engine's static defaults; the merged
    /// policy is validated before any filesystem access. Per-entry I/O
    /// failures during the walk are reported to the sink and never fail the
    /// run.
    ///
    /// # Errors
    ///
    /// Returns `BroomError::ConfigError` when the merged policy or a pattern
    /// is invalid. The same message is also sent to the sink.
    pub fn run(&self, request: &RetentionRequest) -> Result<RunOutcome> {
        if self
            .state
            .compare_exchange(IDLE, RUNNING, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            self.sink
                .warn("ignoring request because a previous scan is still being processed");
            return Ok(RunOutcome::Rejected);
        }
        let _idle_again = StateGuard { state: &self.state };

        match self.run_exclusive(request) {
            Ok(report) => Ok(RunOutcome::Completed(report)),
            Err(e) => {
                self.sink.error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Whether a scan is currently in flight.
    pub fn is_running(&self) -> bool {
        self.state.load(Ordering::Acquire) == RUNNING
    }

    fn run_exclusive(&self, request: &RetentionRequest) -> Result<RetentionReport> {
        // Everything that can be rejected is resolved before the first
        // filesystem call.
        let policy = RetentionPolicy::resolve(&self.defaults, request)?;
        let matcher = PatternSet::compile(&policy.patterns, policy.pattern_type)?;
        let classifier = AgeClassifier::new(policy.age_amount, policy.age_unit);

        let mut report = ScanReport::new(policy.base_folder.to_string_lossy().to_string());
        let walker = TreeWalker::new(
            &policy,
            &matcher,
            &classifier,
            SystemTime::now(),
            self.sink.as_ref(),
        );
        let totals = walker.walk(&mut report);

        Ok(RetentionReport {
            deleted_files: totals.deleted_files,
            deleted_folders: totals.deleted_folders,
            report: report.into_view(policy.report_details),
        })
    }
}

/// Resets the engine to Idle when the run scope ends, error or not.
struct StateGuard<'a> {
    state: &'a AtomicU8,
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        self.state.store(IDLE, Ordering::Release);
    }
}
