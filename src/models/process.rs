//! Process descriptor model.
//!
//! A process is the unit of work consumed by every scheduling
//! discipline: it arrives at a point on the time axis and requires a
//! fixed amount of CPU time to finish.
//!
//! # Time Representation
//! All times are discrete units on an abstract axis starting at t=0.
//! One unit has no physical duration; the consumer decides what a unit
//! means.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable input to the simulation engine: disciplines read
/// descriptors but never mutate them, tracking remaining work in their
/// own per-run state instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: String,
    /// Moment the process becomes eligible to run (units, >= 0).
    pub arrival_time: i64,
    /// Total CPU time required to finish (units, >= 1).
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). Read only by the
    /// Priority discipline; defaults to 0.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a new process descriptor.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.pid, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_process_default_priority() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn test_process_priority_defaults_on_deserialize() {
        // Callers that never show a priority field omit it entirely.
        let p: Process =
            serde_json::from_str(r#"{"pid":"P1","arrival_time":0,"burst_time":4}"#).unwrap();
        assert_eq!(p.priority, 0);
        assert_eq!(p.burst_time, 4);
    }

    #[test]
    fn test_process_json_round_trip() {
        let p = Process::new("P9", 12, 4).with_priority(-1);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
