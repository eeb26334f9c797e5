//! Age threshold computation.
//!
//! Converts the policy's `(amount, unit)` pair into a threshold in seconds
//! and computes entry ages from modification times. Months and years use the
//! fixed 30/365-day approximation; nothing here is calendar-aware.


use crate::config::AgeUnit;
use std::time::SystemTime;

/// Classifies entries as older or younger than a fixed threshold.
///
/// Ages are whole seconds. A negative age (future mtime, clock skew) is
/// valid and never exceeds a positive threshold. Eligibility is strict:
/// an entry exactly at the threshold does not qualify.
#[derive(Debug, Clone, Copy)]
pub struct AgeClassifier {
    threshold_secs: u64,
}

impl AgeClassifier {
    /// Build a classifier for `amount` units.
    ///
    /// The threshold saturates at `u64::MAX` instead of overflowing; policy
    /// validation rejects such amounts before a classifier is built, so a
    /// saturated threshold (which nothing can exceed) is only reachable when
    /// constructing a classifier directly.
    pub fn new(amount: u64, unit: AgeUnit) -> Self {
        Self {
            threshold_secs: amount.saturating_mul(unit.seconds()),
        }
    }

    /// The threshold in seconds.
    pub fn threshold_secs(&self) -> u64 {
        self.threshold_secs
    }

    /// Age of an entry in whole seconds, `now - mtime`.
    ///
    /// Negative when the mtime lies in the future.
    pub fn age_seconds(now: SystemTime, mtime: SystemTime) -> i64 {
        match now.duration_since(mtime) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        }
    }

    /// Whether an age strictly exceeds the threshold.
    pub fn exceeds(&self, age_seconds: i64) -> bool {
        // Compare in u64 so thresholds beyond i64::MAX stay unexceedable
        // instead of wrapping negative.
        age_seconds > 0 && age_seconds as u64 > self.threshold_secs
    }
}
