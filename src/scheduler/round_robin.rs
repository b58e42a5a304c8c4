//! Round-Robin scheduler (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! The ready queue starts as the input list in its given order (it is not
//! sorted by arrival). Until the queue is empty:
//!
//! 1. Pop the front process; `clock = max(clock, arrival)`.
//! 2. Run it for `min(remaining, quantum)` ticks.
//! 3. If it still owes CPU time, append it to the back; otherwise record
//!    completion at the current clock.
//!
//! Terminates after at most `sum(ceil(burst / quantum))` dispatches.

use std::collections::VecDeque;

use log::{debug, info};

use super::CpuScheduler;
use crate::error::{Result, SchedError};
use crate::models::{ExecutionSlice, Process, Schedule};

/// Round-Robin scheduler with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler; fails with `InvalidArgument` unless `quantum > 0`.
    pub fn new(quantum: i64) -> Result<Self> {
        if quantum <= 0 {
            return Err(SchedError::invalid_argument(format!(
                "time quantum must be positive, got {quantum}"
            )));
        }
        Ok(Self { quantum })
    }

    /// Time quantum in ticks.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(self.name());
        let mut queue: VecDeque<Process> = processes
            .iter()
            .map(|p| {
                let mut fresh = p.clone();
                fresh.reset();
                fresh
            })
            .collect();

        let mut clock = 0;
        let mut dispatches = 0usize;
        while let Some(mut process) = queue.pop_front() {
            dispatches += 1;
            let start = clock.max(process.arrival_time);
            clock = start + process.run_for(self.quantum);
            schedule.add_slice(ExecutionSlice::new(process.process_id, start, clock));

            if process.remaining_time == 0 {
                process.complete(clock);
                debug!(
                    "RR: process {} finished at t={}",
                    process.process_id, clock
                );
                schedule.add_finished(process);
            } else {
                debug!(
                    "RR: process {} preempted at t={} ({} left)",
                    process.process_id, clock, process.remaining_time
                );
                queue.push_back(process);
            }
        }

        info!(
            "RR (quantum {}) finished {} processes at t={} after {} dispatches",
            self.quantum,
            schedule.processes.len(),
            clock,
            dispatches
        );
        schedule
    }
}
