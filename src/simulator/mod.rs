//! Simulation entry point and performance reporting.
//!
//! # Usage
//!
//! ```
//! use proc_sim::models::Process;
//! use proc_sim::disciplines::Discipline;
//! use proc_sim::simulator::simulate;
//!
//! let processes = vec![Process::new("P1", 0, 3)];
//! let outcome = simulate(&processes, &Discipline::Sjf).unwrap();
//! assert_eq!(outcome.report.per_process["P1"].completion_time, 3);
//! ```

mod engine;
mod report;

pub use engine::{simulate, simulate_request, SimulationOutcome, SimulationRequest};
pub use report::{ProcessMetrics, SimulationReport};
