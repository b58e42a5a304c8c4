//! Simulation domain models.
//!
//! Provides the process record consumed by every scheduler and the
//! schedule record each scheduler produces.

mod process;
mod schedule;

pub use process::{Process, ProcessId};
pub use schedule::{ExecutionSlice, Schedule};
