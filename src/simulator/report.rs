//! Per-process performance metrics.
//!
//! Derives the standard pedagogical indicators from a completed
//! timeline and its input process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion time | Latest end among a process's segments |
//! | Turnaround time | Completion − arrival |
//! | Waiting time | Turnaround − burst |
//! | Makespan | End of the last timeline segment |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Derived timing metrics for a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Moment the process became eligible (units).
    pub arrival_time: i64,
    /// Total CPU time the process required (units).
    pub burst_time: i64,
    /// Moment the process finished its last unit of execution (units).
    pub completion_time: i64,
    /// Completion minus arrival (units).
    pub turnaround_time: i64,
    /// Time spent eligible but not running (units).
    pub waiting_time: i64,
}

/// Performance report for a full simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Metrics keyed by pid.
    pub per_process: HashMap<String, ProcessMetrics>,
    /// Mean waiting time, `None` for an empty process set.
    pub avg_waiting_time: Option<f64>,
    /// Mean turnaround time, `None` for an empty process set.
    pub avg_turnaround_time: Option<f64>,
    /// End time of the last timeline segment (units).
    pub makespan: i64,
}

impl SimulationReport {
    /// Computes the report from a timeline and its input processes.
    ///
    /// A process that never appears on the timeline is skipped; on
    /// timelines produced by this crate's disciplines every validated
    /// process appears.
    pub fn calculate(timeline: &Timeline, processes: &[Process]) -> Self {
        let mut per_process = HashMap::with_capacity(processes.len());
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;

        for p in processes {
            let Some(completion) = timeline.completion_time(&p.pid) else {
                continue;
            };
            let turnaround = completion - p.arrival_time;
            let waiting = turnaround - p.burst_time;
            total_waiting += waiting;
            total_turnaround += turnaround;
            per_process.insert(
                p.pid.clone(),
                ProcessMetrics {
                    arrival_time: p.arrival_time,
                    burst_time: p.burst_time,
                    completion_time: completion,
                    turnaround_time: turnaround,
                    waiting_time: waiting,
                },
            );
        }

        let count = per_process.len();
        let (avg_waiting_time, avg_turnaround_time) = if count == 0 {
            (None, None)
        } else {
            (
                Some(total_waiting as f64 / count as f64),
                Some(total_turnaround as f64 / count as f64),
            )
        };

        Self {
            per_process,
            avg_waiting_time,
            avg_turnaround_time,
            makespan: timeline.makespan(),
        }
    }
}
