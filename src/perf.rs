//! Bounded measurement log for monitoring long operations.
//!
//! Parsing and analytics are blocking, run-to-completion computations, so
//! components that monitor them (the CLI here) record how long each stage
//! took. [`PerfLog`] is a fixed-capacity ring buffer of labeled durations:
//! when full, the oldest entry is overwritten, so memory stays bounded no
//! matter how many files a session processes.
//!
//! # Example
//!
//! ```rust
//! use chatlens::perf::PerfLog;
//! use std::time::Duration;
//!
//! let mut log = PerfLog::with_capacity(4);
//! log.record("parse chat.txt", Duration::from_millis(12));
//!
//! let value = log.time("analytics", || 2 + 2);
//! assert_eq!(value, 4);
//! assert_eq!(log.len(), 2);
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// One labeled timing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// What was measured.
    pub label: String,

    /// How long it took.
    pub duration: Duration,
}

/// Fixed-capacity ring buffer of [`Measurement`] entries.
#[derive(Debug, Clone)]
pub struct PerfLog {
    capacity: usize,
    entries: VecDeque<Measurement>,
}

impl PerfLog {
    /// Creates a log holding at most `capacity` measurements.
    ///
    /// A zero capacity is bumped to one so `record` always keeps the most
    /// recent entry.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a measurement, dropping the oldest entry when full.
    pub fn record(&mut self, label: impl Into<String>, duration: Duration) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Measurement {
            label: label.into(),
            duration,
        });
    }

    /// Runs `f`, records its wall-clock duration under `label`, and returns
    /// its result.
    pub fn time<T>(&mut self, label: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.record(label, start.elapsed());
        value
    }

    /// Iterates over retained measurements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.entries.iter()
    }

    /// Returns the number of retained measurements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of retained measurements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the sum of all retained durations.
    pub fn total(&self) -> Duration {
        self.entries.iter().map(|m| m.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_iterate() {
        let mut log = PerfLog::with_capacity(8);
        log.record("first", Duration::from_millis(10));
        log.record("second", Duration::from_millis(20));

        let labels: Vec<&str> = log.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert_eq!(log.len(), 2);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_overwrites_oldest_when_full() {
        let mut log = PerfLog::with_capacity(2);
        log.record("a", Duration::from_millis(1));
        log.record("b", Duration::from_millis(2));
        log.record("c", Duration::from_millis(3));

        let labels: Vec<&str> = log.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut log = PerfLog::with_capacity(0);
        log.record("a", Duration::from_millis(1));
        log.record("b", Duration::from_millis(2));
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().unwrap().label, "b");
    }

    #[test]
    fn test_time_returns_closure_value() {
        let mut log = PerfLog::with_capacity(4);
        let value = log.time("compute", || 40 + 2);
        assert_eq!(value, 42);
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().unwrap().label, "compute");
    }

    #[test]
    fn test_total() {
        let mut log = PerfLog::with_capacity(4);
        log.record("a", Duration::from_millis(10));
        log.record("b", Duration::from_millis(15));
        assert_eq!(log.total(), Duration::from_millis(25));
    }
}
