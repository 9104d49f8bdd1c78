//! Simulation engine.
//!
//! Validates the input, runs the chosen discipline over it, normalizes
//! the resulting segments, and derives the performance report. Each
//! invocation is a pure function of its arguments: the caller's
//! process set is never mutated and nothing survives between runs.

use serde::{Deserialize, Serialize};

use crate::disciplines::Discipline;
use crate::models::{Process, Timeline};
use crate::validation::{validate_input, ValidationError};

use super::report::SimulationReport;

/// Input container for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline to run them under.
    pub discipline: Discipline,
}

impl SimulationRequest {
    /// Creates a new simulation request.
    pub fn new(processes: Vec<Process>, discipline: Discipline) -> Self {
        Self {
            processes,
            discipline,
        }
    }
}

/// Result of a simulation run, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Normalized execution timeline.
    pub timeline: Timeline,
    /// Per-process metrics and averages.
    pub report: SimulationReport,
}

/// Runs a full simulation: validate, schedule, normalize, report.
///
/// Fails fast on invalid input — no segment is produced when any check
/// fails, and all detected issues are returned together. Once
/// validation passes the simulation cannot fail.
///
/// # Example
///
/// ```
/// use proc_sim::models::Process;
/// use proc_sim::disciplines::Discipline;
/// use proc_sim::simulator::simulate;
///
/// let processes = vec![
///     Process::new("P1", 0, 5),
///     Process::new("P2", 1, 3),
/// ];
/// let outcome = simulate(&processes, &Discipline::RoundRobin { quantum: 2 }).unwrap();
/// assert_eq!(outcome.timeline.makespan(), 8);
/// ```
pub fn simulate(
    processes: &[Process],
    discipline: &Discipline,
) -> Result<SimulationOutcome, Vec<ValidationError>> {
    validate_input(processes, discipline)?;

    let timeline = Timeline::from_raw(discipline.run(processes));
    let report = SimulationReport::calculate(&timeline, processes);

    Ok(SimulationOutcome { timeline, report })
}

/// Runs a simulation from a request container.
pub fn simulate_request(
    request: &SimulationRequest,
) -> Result<SimulationOutcome, Vec<ValidationError>> {
    simulate(&request.processes, &request.discipline)
}
