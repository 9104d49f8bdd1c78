//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order. The sort is stable, so
//! processes sharing an arrival time keep their input order.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use crate::models::{GanttSegment, Process};

/// Runs FCFS over a validated process set.
///
/// Emits exactly one segment per process plus an idle segment for each
/// gap before a late arrival.
pub(super) fn run(processes: &[Process]) -> Vec<GanttSegment> {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival_time);

    let mut now: i64 = 0;
    let mut segments = Vec::with_capacity(order.len());

    for p in order {
        if now < p.arrival_time {
            segments.push(GanttSegment::idle(now, p.arrival_time));
            now = p.arrival_time;
        }
        segments.push(GanttSegment::process(&p.pid, now, now + p.burst_time));
        now += p.burst_time;
    }

    segments
}
