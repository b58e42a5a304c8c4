//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (stable: equal arrivals keep input order).
//! 2. For each process: `clock = max(clock, arrival)`, run the full burst,
//!    record completion at the new clock.
//!
//! No preemption. The CPU idles when the next process has not arrived yet.

use log::{debug, info};

use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{ExecutionSlice, Process, Schedule};

/// Non-preemptive FCFS scheduler.
#[derive(Debug, Clone)]
pub struct FcfsScheduler {
    engine: RuleEngine,
}

impl FcfsScheduler {
    /// Creates a new FCFS scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::EarliestArrival),
        }
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(self.name());
        let order = self
            .engine
            .sort_indices(processes, &SchedulingContext::at_time(0));

        let mut clock = 0;
        for idx in order {
            let mut process = processes[idx].clone();
            if process.arrival_time > clock {
                debug!(
                    "FCFS: CPU idle {}..{} waiting for process {}",
                    clock, process.arrival_time, process.process_id
                );
            }
            let start = clock.max(process.arrival_time);
            clock = start + process.burst_time;

            schedule.add_slice(ExecutionSlice::new(process.process_id, start, clock));
            process.complete(clock);
            debug!(
                "FCFS: process {} ran {}..{}",
                process.process_id, start, clock
            );
            schedule.add_finished(process);
        }

        info!(
            "FCFS finished {} processes at t={}",
            schedule.processes.len(),
            clock
        );
        schedule
    }
}
