//! Simulation domain models.
//!
//! Provides the core data types for describing scheduling problems and
//! their solutions: the immutable [`Process`] descriptor consumed by
//! every discipline, and the [`Timeline`] of [`GanttSegment`]s a
//! simulation produces.
//!
//! All types are serde-serializable so a presentation layer can move
//! them across any boundary (JSON for a web UI, files for fixtures).

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{GanttSegment, SegmentOccupant, Timeline};
