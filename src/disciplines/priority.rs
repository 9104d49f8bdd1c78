//! Priority scheduling (non-preemptive).
//!
//! Same control structure as SJF with the selection key swapped: the
//! arrived, unfinished process with the lowest priority value runs to
//! completion. A more urgent process arriving mid-execution does not
//! preempt the running one.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use crate::models::{GanttSegment, Process};

/// Runs Priority scheduling over a validated process set.
///
/// Lower priority value = more urgent. Ties break by arrival time,
/// then pid.
pub(super) fn run(processes: &[Process]) -> Vec<GanttSegment> {
    super::run_exhaustive(processes, |p| i64::from(p.priority))
}
