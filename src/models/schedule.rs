//! Schedule (simulation output) model.
//!
//! A schedule is the result of running one algorithm over a process
//! list: the finished processes, in the order the algorithm finalized
//! them, and the CPU timeline as a list of execution slices.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};
use crate::error::Result;
use crate::scheduler::ScheduleMetrics;

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: ProcessId, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A completed simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Name of the algorithm that produced this schedule.
    pub algorithm: String,
    /// Finished processes, in finalization order.
    pub processes: Vec<Process>,
    /// CPU timeline, in execution order.
    pub slices: Vec<ExecutionSlice>,
}

impl Schedule {
    /// Creates an empty schedule for the named algorithm.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            processes: Vec::new(),
            slices: Vec::new(),
        }
    }

    /// Appends a slice, merging it into the previous one when the same
    /// process simply keeps the CPU.
    pub fn add_slice(&mut self, slice: ExecutionSlice) {
        if slice.duration() <= 0 {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == slice.process_id && last.end == slice.start {
                last.end = slice.end;
                return;
            }
        }
        self.slices.push(slice);
    }

    /// Records a finished process.
    pub fn add_finished(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Latest completion time (0 for an empty schedule).
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Ticks in `[0, makespan)` during which the CPU ran nothing.
    pub fn idle_time(&self) -> i64 {
        let busy: i64 = self.slices.iter().map(ExecutionSlice::duration).sum();
        self.makespan() - busy
    }

    /// Completion time of the given process.
    pub fn completion_of(&self, process_id: ProcessId) -> Option<i64> {
        self.process(process_id).map(|p| p.completion_time)
    }

    /// Looks up a finished process by ID.
    pub fn process(&self, process_id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.process_id == process_id)
    }

    /// Finalization order as process IDs.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.processes.iter().map(|p| p.process_id).collect()
    }

    /// Aggregate metrics over the finished processes.
    pub fn metrics(&self) -> Result<ScheduleMetrics> {
        ScheduleMetrics::calculate(&self.processes)
    }
}
