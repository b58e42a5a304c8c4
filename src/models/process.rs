//! Process model.
//!
//! A process is a single CPU-bound job with a known arrival time and
//! burst (total CPU demand). Schedulers fill in the computed fields
//! once the process finishes.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier, as given by the input.
pub type ProcessId = i64;

/// A process to be scheduled on a single CPU.
///
/// `Process` has value semantics: schedulers clone the input snapshot
/// before running, so the caller's list is never mutated and repeated
/// runs never observe each other's `remaining_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub process_id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed. Only Round-Robin draws it down.
    pub remaining_time: i64,
    /// Tick at which the process finished.
    pub completion_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    #[serde(default)]
    finished: bool,
}

impl Process {
    /// Creates an unscheduled process.
    pub fn new(process_id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            process_id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            completion_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
            finished: false,
        }
    }

    /// Records completion at `completion_time` and derives turnaround and waiting.
    pub fn complete(&mut self, completion_time: i64) {
        debug_assert!(
            !self.finished,
            "process {} completed twice",
            self.process_id
        );
        debug_assert!(completion_time >= self.arrival_time);
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        self.finished = true;
    }

    /// Whether completion fields have been written.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the process has arrived by tick `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Clears all computed fields and restores `remaining_time` to the burst.
    pub fn reset(&mut self) {
        *self = Self::new(self.process_id, self.arrival_time, self.burst_time);
    }

    /// Runs the process for at most `slice` ticks; returns ticks actually used.
    ///
    /// Never drives `remaining_time` below zero.
    pub(crate) fn run_for(&mut self, slice: i64) -> i64 {
        let used = self.remaining_time.min(slice);
        self.remaining_time -= used;
        used
    }
}
