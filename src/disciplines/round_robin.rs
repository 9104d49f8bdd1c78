//! Round Robin (preemptive, fixed quantum).
//!
//! An explicit FIFO ready queue grants each process at most one
//! quantum per turn. After a slice ends, processes that arrived during
//! it join the queue before the just-run process returns to the tail,
//! so a new arrival is always served ahead of the process that was
//! just preempted. Processes sharing an arrival time enqueue in input
//! order.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use crate::models::{GanttSegment, Process};

/// Runs Round Robin over a validated process set.
///
/// Each turn executes `min(quantum, remaining)` units for the process
/// at the head of the ready queue.
pub(super) fn run(processes: &[Process], quantum: i64) -> Vec<GanttSegment> {
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    // Set once a process enters the queue; never cleared, so the
    // arrival scan cannot double-enqueue.
    let mut queued = vec![false; processes.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut now: i64 = 0;
    let mut segments = Vec::new();

    enqueue_arrivals(processes, &remaining, &mut queued, &mut queue, now);

    while remaining.iter().any(|&r| r > 0) {
        let Some(i) = queue.pop_front() else {
            let next_arrival = processes
                .iter()
                .enumerate()
                .filter(|(i, _)| remaining[*i] > 0)
                .map(|(_, p)| p.arrival_time)
                .min()
                .unwrap_or(now);
            segments.push(GanttSegment::idle(now, next_arrival));
            now = next_arrival;
            enqueue_arrivals(processes, &remaining, &mut queued, &mut queue, now);
            continue;
        };

        let slice = quantum.min(remaining[i]);
        segments.push(GanttSegment::process(&processes[i].pid, now, now + slice));
        now += slice;
        remaining[i] -= slice;

        // Arrivals during the slice go ahead of the preempted process.
        enqueue_arrivals(processes, &remaining, &mut queued, &mut queue, now);
        if remaining[i] > 0 {
            queue.push_back(i);
        }
    }

    segments
}

/// Enqueues every not-yet-queued, unfinished process that has arrived
/// by `now`, in input order.
fn enqueue_arrivals(
    processes: &[Process],
    remaining: &[i64],
    queued: &mut [bool],
    queue: &mut VecDeque<usize>,
    now: i64,
) {
    for (i, p) in processes.iter().enumerate() {
        if !queued[i] && remaining[i] > 0 && p.arrival_time <= now {
            queued[i] = true;
            queue.push_back(i);
        }
    }
}
