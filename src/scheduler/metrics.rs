//! Schedule quality metrics.
//!
//! Reduces a list of finished processes into aggregate statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | CPU Utilization | 100 * sum(burst) / makespan |
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | Throughput | processes / makespan |

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::models::Process;

/// Aggregate performance indicators of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Percentage of `[0, makespan)` the CPU was busy (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of all bursts.
    pub total_burst: i64,
    /// Processes finished per tick.
    pub throughput: f64,
    /// Number of processes measured.
    pub process_count: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from finished processes.
    ///
    /// # Errors
    /// `InvalidInput` if `processes` is empty, any process is unfinished,
    /// or the makespan is zero.
    pub fn calculate(processes: &[Process]) -> Result<Self> {
        if processes.is_empty() {
            return Err(SchedError::invalid_input(
                "cannot compute metrics for an empty process list",
            ));
        }
        if let Some(p) = processes.iter().find(|p| !p.is_finished()) {
            return Err(SchedError::invalid_input(format!(
                "process {} has not finished",
                p.process_id
            )));
        }

        // Sums are widened so per-process times near `i64::MAX` cannot
        // overflow them.
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_burst: i128 = 0;
        let mut makespan: i64 = 0;
        for p in processes {
            total_waiting += i128::from(p.waiting_time);
            total_turnaround += i128::from(p.turnaround_time);
            total_burst += i128::from(p.burst_time);
            makespan = makespan.max(p.completion_time);
        }
        let total_burst = i64::try_from(total_burst).map_err(|_| {
            SchedError::invalid_input("total burst time overflows the simulation clock")
        })?;

        if makespan <= 0 {
            return Err(SchedError::invalid_input(
                "total elapsed time is zero; utilization is undefined",
            ));
        }

        let n = processes.len() as f64;
        Ok(Self {
            cpu_utilization: total_burst as f64 / makespan as f64 * 100.0,
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            makespan,
            total_burst,
            throughput: n / makespan as f64,
            process_count: processes.len(),
        })
    }

    /// Ticks within the makespan the CPU spent idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan - self.total_burst
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn finished(id: i64, arrival: i64, burst: i64, completion: i64) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.complete(completion);
        p
    }

    #[test]
    fn test_metrics_basic() {
        let processes = vec![finished(1, 0, 5, 5), finished(2, 2, 3, 8)];
        let m = ScheduleMetrics::calculate(&processes).unwrap();

        assert_eq!(m.makespan, 8);
        assert_eq!(m.total_burst, 8);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
        assert!((m.avg_waiting_time - 1.5).abs() < 1e-10); // (0 + 3) / 2
        assert!((m.avg_turnaround_time - 5.5).abs() < 1e-10); // (5 + 6) / 2
        assert!((m.throughput - 0.25).abs() < 1e-10);
        assert_eq!(m.idle_time(), 0);
    }

    #[test]
    fn test_utilization_with_gap() {
        let processes = vec![finished(1, 0, 2, 2), finished(2, 6, 2, 8)];
        let m = ScheduleMetrics::calculate(&processes).unwrap();
        assert!((m.cpu_utilization - 50.0).abs() < 1e-10);
        assert_eq!(m.idle_time(), 4);
    }

    #[test]
    fn test_large_times_do_not_overflow_sums() {
        let processes = vec![finished(1, 0, 1, i64::MAX), finished(2, 0, 1, i64::MAX)];
        let m = ScheduleMetrics::calculate(&processes).unwrap();
        assert_eq!(m.makespan, i64::MAX);
        assert_eq!(m.total_burst, 2);
        assert!((m.avg_turnaround_time - i64::MAX as f64).abs() < 1e3);
    }

    #[test]
    fn test_empty_is_invalid_input() {
        let err = ScheduleMetrics::calculate(&[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_unfinished_is_invalid_input() {
        let err = ScheduleMetrics::calculate(&[Process::new(1, 0, 3)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
        assert!(err.message.contains("process 1"));
    }

    #[test]
    fn test_zero_total_time_is_invalid_input() {
        let err = ScheduleMetrics::calculate(&[finished(1, 0, 0, 0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }
}
