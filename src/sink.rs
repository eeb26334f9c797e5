//! Error/warning side channel for scan runs.
//!
//! The engine and the walker never abort a scan for a per-entry I/O failure.
//! Instead they report human-readable messages through a [`Sink`], so the
//! host (CLI, embedding application, tests) decides where the messages go.
//!
//! Two channels are distinguished:
//! - `error`: configuration failures and per-entry I/O failures
//! - `warn`: non-error conditions such as a rejected concurrent run

use std::sync::Mutex;

/// Receiver for out-of-band error and warning messages.
pub trait Sink: Send + Sync {
    /// Report an error message (config failure or per-entry I/O failure).
    fn error(&self, msg: &str);

    /// Report a warning message (e.g. a run rejected because one is active).
    fn warn(&self, msg: &str);
}

/// Default sink: prints errors and warnings to stderr.
#[derive(Debug, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn error(&self, msg: &str) {
        eprintln!("Error: {}", msg);
    }

    fn warn(&self, msg: &str) {
        eprintln!("Warning: {}", msg);
    }
}

/// In-memory sink that collects messages, used by tests and embedders that
/// want to inspect what went wrong during a scan.
#[derive(Debug, Default)]
pub struct MemorySink {
    errors: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All error messages received so far.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// All warning messages received so far.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl Sink for MemorySink {
    fn error(&self, msg: &str) {
        self.errors
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(msg.to_string());
    }

    fn warn(&self, msg: &str) {
        self.warnings
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(msg.to_string());
    }
}
