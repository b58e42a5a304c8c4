//! Shortest-Job-First scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! Repeatedly pick the pending process minimizing `(burst_time, arrival_time)`
//! (ties beyond that keep input order), then `clock = max(clock, arrival)`
//! and run its full burst.
//!
//! In [`SjfMode::Global`] the pick ranges over *all* pending processes,
//! including ones that have not arrived yet; the clock then jumps forward
//! to that process's arrival. [`SjfMode::ArrivalGated`] restricts the pick
//! to processes that have arrived by the current clock, and only when
//! nothing has arrived does it jump to the earliest arrival.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{ExecutionSlice, Process, Schedule};

/// Candidate set used when picking the next job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SjfMode {
    /// Shortest burst among all pending processes, arrived or not.
    #[default]
    Global,
    /// Shortest burst among processes that have arrived.
    ArrivalGated,
}

/// Non-preemptive SJF scheduler.
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    mode: SjfMode,
    shortest_first: RuleEngine,
    earliest_first: RuleEngine,
}

impl SjfScheduler {
    /// Creates a scheduler in [`SjfMode::Global`].
    pub fn new() -> Self {
        Self::with_mode(SjfMode::Global)
    }

    /// Creates a scheduler with the given candidate mode.
    pub fn with_mode(mode: SjfMode) -> Self {
        Self {
            mode,
            shortest_first: RuleEngine::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::EarliestArrival),
            earliest_first: RuleEngine::new()
                .with_rule(rules::EarliestArrival)
                .with_tie_breaker(rules::ShortestBurst),
        }
    }

    /// Candidate mode.
    pub fn mode(&self) -> SjfMode {
        self.mode
    }

    fn select(&self, pending: &[Process], context: &SchedulingContext) -> Option<usize> {
        match self.mode {
            SjfMode::Global => self.shortest_first.select_best(pending, context),
            SjfMode::ArrivalGated => self
                .shortest_first
                .select_best_where(pending, context, |p| context.is_arrived(p))
                .or_else(|| self.earliest_first.select_best(pending, context)),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(self.name());
        let mut pending: Vec<Process> = processes.to_vec();

        let mut clock = 0;
        while let Some(idx) = self.select(&pending, &SchedulingContext::at_time(clock)) {
            let mut process = pending.remove(idx);
            let start = clock.max(process.arrival_time);
            clock = start + process.burst_time;

            schedule.add_slice(ExecutionSlice::new(process.process_id, start, clock));
            process.complete(clock);
            debug!(
                "SJF: process {} (burst {}) ran {}..{}",
                process.process_id, process.burst_time, start, clock
            );
            schedule.add_finished(process);
        }

        info!(
            "SJF ({:?}) finished {} processes at t={}",
            self.mode,
            schedule.processes.len(),
            clock
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_first() {
        let input = vec![
            Process::new(1, 0, 6),
            Process::new(2, 0, 2),
            Process::new(3, 0, 4),
        ];
        let schedule = SjfScheduler::new().run(&input);
        assert_eq!(schedule.completion_order(), vec![2, 3, 1]);
        assert_eq!(schedule.completion_of(1), Some(12));
    }

    #[test]
    fn test_tie_break_earlier_arrival() {
        let input = vec![Process::new(1, 2, 3), Process::new(2, 1, 3)];
        let schedule = SjfScheduler::new().run(&input);
        assert_eq!(schedule.completion_order(), vec![2, 1]);
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let input = vec![Process::new(8, 0, 3), Process::new(3, 0, 3)];
        let schedule = SjfScheduler::new().run(&input);
        assert_eq!(schedule.completion_order(), vec![8, 3]);
    }

    #[test]
    fn test_global_mode_ignores_arrival() {
        // P2 is shorter but arrives later; global SJF still picks it first
        // and idles the CPU until it arrives.
        let input = vec![Process::new(1, 0, 5), Process::new(2, 10, 1)];
        let schedule = SjfScheduler::new().run(&input);

        assert_eq!(schedule.completion_order(), vec![2, 1]);
        assert_eq!(schedule.completion_of(2), Some(11));
        assert_eq!(schedule.completion_of(1), Some(16));
        assert_eq!(schedule.process(1).unwrap().waiting_time, 11);
    }

    #[test]
    fn test_arrival_gated_mode() {
        let input = vec![Process::new(1, 0, 5), Process::new(2, 10, 1)];
        let schedule = SjfScheduler::with_mode(SjfMode::ArrivalGated).run(&input);

        assert_eq!(schedule.completion_order(), vec![1, 2]);
        assert_eq!(schedule.completion_of(1), Some(5));
        assert_eq!(schedule.completion_of(2), Some(11));
    }

    #[test]
    fn test_arrival_gated_jumps_to_earliest() {
        let input = vec![
            Process::new(1, 4, 9),
            Process::new(2, 4, 2),
            Process::new(3, 20, 1),
        ];
        let schedule = SjfScheduler::with_mode(SjfMode::ArrivalGated).run(&input);

        assert_eq!(schedule.completion_order(), vec![2, 1, 3]);
        assert_eq!(schedule.completion_of(2), Some(6));
        assert_eq!(schedule.completion_of(1), Some(15));
        assert_eq!(schedule.completion_of(3), Some(21));
    }

    #[test]
    fn test_empty_input() {
        let schedule = SjfScheduler::new().run(&[]);
        assert!(schedule.processes.is_empty());
    }
}
