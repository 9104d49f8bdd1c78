//! Scheduling disciplines.
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Selection key |
//! |------------|-----------|---------------|
//! | FCFS | No | Arrival time |
//! | SJF | No | Burst time |
//! | SRTF | Yes (unit steps) | Remaining time |
//! | Priority | No | Priority value (lower = more urgent) |
//! | Round Robin | Yes (fixed quantum) | FIFO ready queue |
//!
//! Each discipline is a pure function from a validated process set to a
//! raw segment sequence; [`crate::models::Timeline::from_raw`] cleans
//! the output. Non-preemptive selection breaks ties by arrival time,
//! then lexicographic pid; FCFS and Round Robin keep input order among
//! equal arrivals.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

use serde::{Deserialize, Serialize};

use crate::models::{GanttSegment, Process};

/// A scheduling discipline, selected per simulation run.
///
/// A closed set: the engine matches exhaustively, so a new discipline
/// cannot be added without the compiler pointing at every dispatch
/// site. The Round Robin quantum travels inside its variant, making
/// "quantum if and only if RR" structural rather than conventional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// First-Come-First-Served (non-preemptive).
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive).
    Srtf,
    /// Priority, lower value first (non-preemptive).
    Priority,
    /// Round Robin with a fixed time quantum (preemptive).
    RoundRobin {
        /// Maximum slice length per turn (units, >= 1).
        quantum: i64,
    },
}

impl Discipline {
    /// Conventional acronym for display (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Srtf => "SRTF",
            Discipline::Priority => "PRIORITY",
            Discipline::RoundRobin { .. } => "RR",
        }
    }

    /// Runs the discipline over a validated process set, producing the
    /// raw (un-normalized) segment sequence.
    pub(crate) fn run(&self, processes: &[Process]) -> Vec<GanttSegment> {
        match self {
            Discipline::Fcfs => fcfs::run(processes),
            Discipline::Sjf => sjf::run(processes),
            Discipline::Srtf => srtf::run(processes),
            Discipline::Priority => priority::run(processes),
            Discipline::RoundRobin { quantum } => round_robin::run(processes, *quantum),
        }
    }
}

/// Shared loop for the non-preemptive selection disciplines (SJF,
/// Priority).
///
/// At each decision point, picks the process with the smallest key
/// among the unfinished processes that have arrived, breaking ties by
/// arrival time and then pid, and runs it to completion. When nothing
/// has arrived yet, emits an idle segment up to the next arrival.
///
/// Terminates because each iteration either finishes one process or
/// strictly advances time to a pending arrival.
fn run_exhaustive<F>(processes: &[Process], key: F) -> Vec<GanttSegment>
where
    F: Fn(&Process) -> i64,
{
    let mut finished = vec![false; processes.len()];
    let mut finished_count = 0;
    let mut now: i64 = 0;
    let mut segments = Vec::with_capacity(processes.len());

    while finished_count < processes.len() {
        let available = processes
            .iter()
            .enumerate()
            .filter(|&(i, p)| !finished[i] && p.arrival_time <= now)
            .min_by(|&(_, a), &(_, b)| {
                (key(a), a.arrival_time, a.pid.as_str()).cmp(&(
                    key(b),
                    b.arrival_time,
                    b.pid.as_str(),
                ))
            });

        match available {
            Some((i, p)) => {
                segments.push(GanttSegment::process(&p.pid, now, now + p.burst_time));
                now += p.burst_time;
                finished[i] = true;
                finished_count += 1;
            }
            None => {
                let next_arrival = processes
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !finished[*i])
                    .map(|(_, p)| p.arrival_time)
                    .min()
                    .unwrap_or(now);
                segments.push(GanttSegment::idle(now, next_arrival));
                now = next_arrival;
            }
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discipline_names() {
        assert_eq!(Discipline::Fcfs.name(), "FCFS");
        assert_eq!(Discipline::Sjf.name(), "SJF");
        assert_eq!(Discipline::Srtf.name(), "SRTF");
        assert_eq!(Discipline::Priority.name(), "PRIORITY");
        assert_eq!(Discipline::RoundRobin { quantum: 2 }.name(), "RR");
    }

    #[test]
    fn test_discipline_json_round_trip() {
        let d = Discipline::RoundRobin { quantum: 3 };
        let json = serde_json::to_string(&d).unwrap();
        let back: Discipline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_run_dispatches_per_variant() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 0, 1)];
        // SJF picks the shorter job first; FCFS keeps input order.
        let sjf = Discipline::Sjf.run(&processes);
        assert_eq!(sjf[0].pid(), Some("P2"));
        let fcfs = Discipline::Fcfs.run(&processes);
        assert_eq!(fcfs[0].pid(), Some("P1"));
    }
}
