//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! Time advances in unit steps. At each step the arrived, unfinished
//! process with the least remaining work holds the CPU, so a newly
//! arrived shorter job preempts the running one immediately. A segment
//! stays open while the selected pid is unchanged and is flushed when
//! the selection switches or idle time begins.
//!
//! Terminates because total remaining work decreases by exactly one
//! unit per productive step, and idle jumps land on a pending arrival.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::{GanttSegment, Process};

/// Runs SRTF over a validated process set.
///
/// Ties on remaining time break by arrival time, then pid.
pub(super) fn run(processes: &[Process]) -> Vec<GanttSegment> {
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut left: i64 = remaining.iter().sum();
    let mut now: i64 = 0;
    let mut segments = Vec::new();
    // Open run: (process index, segment start)
    let mut open: Option<(usize, i64)> = None;

    while left > 0 {
        let selected = processes
            .iter()
            .enumerate()
            .filter(|&(i, p)| remaining[i] > 0 && p.arrival_time <= now)
            .min_by(|&(i, a), &(j, b)| {
                (remaining[i], a.arrival_time, a.pid.as_str()).cmp(&(
                    remaining[j],
                    b.arrival_time,
                    b.pid.as_str(),
                ))
            })
            .map(|(i, _)| i);

        match selected {
            Some(i) => {
                if open.map(|(running, _)| running) != Some(i) {
                    flush(&mut segments, processes, open.take(), now);
                    open = Some((i, now));
                }
                remaining[i] -= 1;
                left -= 1;
                now += 1;
            }
            None => {
                flush(&mut segments, processes, open.take(), now);
                let next_arrival = processes
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| remaining[*i] > 0)
                    .map(|(_, p)| p.arrival_time)
                    .min()
                    .unwrap_or(now);
                segments.push(GanttSegment::idle(now, next_arrival));
                now = next_arrival;
            }
        }
    }

    flush(&mut segments, processes, open, now);
    segments
}

/// Closes an open run segment, if any, at the given end time.
fn flush(
    segments: &mut Vec<GanttSegment>,
    processes: &[Process],
    open: Option<(usize, i64)>,
    end: i64,
) {
    if let Some((i, start)) = open {
        segments.push(GanttSegment::process(&processes[i].pid, start, end));
    }
}
