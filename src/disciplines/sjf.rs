//! Shortest-Job-First (non-preemptive).
//!
//! At each decision point the arrived, unfinished process with the
//! smallest burst time runs to completion. A shorter job arriving
//! mid-execution waits for the current job to finish — that is the
//! defining non-preemptive property.
//!
//! Provably optimal for mean waiting time among non-preemptive
//! single-machine disciplines (Smith, 1956).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::{GanttSegment, Process};

/// Runs SJF over a validated process set.
///
/// Ties on burst time break by arrival time, then pid.
pub(super) fn run(processes: &[Process]) -> Vec<GanttSegment> {
    super::run_exhaustive(processes, |p| p.burst_time)
}
