//! CPU scheduling simulation engine.
//!
//! Simulates single-processor process scheduling under five classic
//! disciplines and produces an execution timeline (Gantt chart) plus
//! per-process performance metrics, intended for pedagogical
//! visualization. Time is a discrete non-negative integer axis; one
//! unit has no physical duration.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `GanttSegment`, `Timeline`
//! - **`validation`**: Input integrity checks (blank/duplicate pids,
//!   non-positive bursts, negative arrivals, invalid quantum)
//! - **`disciplines`**: The five scheduling disciplines — FCFS, SJF,
//!   SRTF, Priority, Round Robin
//! - **`simulator`**: The simulation entry point and metrics report
//!
//! # Architecture
//!
//! The engine is a pure, synchronous library: a caller supplies an
//! immutable process set and a [`disciplines::Discipline`], and receives
//! a normalized [`models::Timeline`] and a [`simulator::SimulationReport`].
//! No state persists between invocations, and the engine never mutates
//! its input. Presentation concerns (data entry, colors, rendering)
//! live entirely outside this crate.
//!
//! # Example
//!
//! ```
//! use proc_sim::models::Process;
//! use proc_sim::disciplines::Discipline;
//! use proc_sim::simulator::simulate;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//! ];
//! let outcome = simulate(&processes, &Discipline::Fcfs).unwrap();
//! assert_eq!(outcome.timeline.makespan(), 8);
//! assert_eq!(outcome.report.per_process["P2"].waiting_time, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod disciplines;
pub mod models;
pub mod simulator;
pub mod validation;
