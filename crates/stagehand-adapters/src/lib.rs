//! Infrastructure adapters for Stagehand.
//!
//! This crate implements the ports defined in
//! `stagehand-core::application::ports`. It contains all external
//! dependencies and I/O operations: the real filesystem, progress
//! sinks, and the JSON plan-file loader.

pub mod filesystem;
pub mod plan_loader;
pub mod progress;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use plan_loader::{PlanFile, load_plan};
pub use progress::{BufferSink, TracingSink};
