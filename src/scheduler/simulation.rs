//! Running schedulers and comparing their results.

use log::info;
use serde::{Deserialize, Serialize};

use super::{Algorithm, CpuScheduler, ScheduleMetrics};
use crate::error::{Result, SchedError};
use crate::models::{Process, Schedule};
use crate::validation::validate_processes;

/// A schedule together with its aggregate metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-process outcome and timeline.
    pub schedule: Schedule,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
}

/// Runs `scheduler` over a copy of `processes` and measures the result.
///
/// # Errors
/// `InvalidInput` if `processes` is empty (metrics are undefined) or fails
/// validation (which also rules out clock overflow).
pub fn simulate(scheduler: &dyn CpuScheduler, processes: &[Process]) -> Result<SimulationResult> {
    if processes.is_empty() {
        return Err(SchedError::invalid_input("no processes to schedule"));
    }
    validate_processes(processes).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        SchedError::invalid_input(messages.join("; "))
    })?;
    let schedule = scheduler.run(processes);
    let metrics = schedule.metrics()?;
    info!(
        "{}: utilization {:.2}%, avg waiting {:.2}, avg turnaround {:.2}",
        scheduler.name(),
        metrics.cpu_utilization,
        metrics.avg_waiting_time,
        metrics.avg_turnaround_time
    );
    Ok(SimulationResult { schedule, metrics })
}

/// One algorithm's averages in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Algorithm label ("FCFS", "SJF", "RR").
    pub algorithm: String,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// CPU utilization percentage.
    pub cpu_utilization: f64,
}

/// Side-by-side averages of several algorithms over the same input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comparison {
    /// Entries in the order the algorithms were requested.
    pub entries: Vec<ComparisonEntry>,
    /// Full results, same order as `entries`.
    #[serde(skip)]
    pub results: Vec<SimulationResult>,
}

impl Comparison {
    /// Looks up an entry by algorithm label.
    pub fn entry(&self, algorithm: &str) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// Entry with the lowest average waiting time (first wins on ties).
    pub fn best_by_waiting(&self) -> Option<&ComparisonEntry> {
        self.entries.iter().fold(None, |best, e| match best {
            Some(b) if b.avg_waiting_time <= e.avg_waiting_time => Some(b),
            _ => Some(e),
        })
    }

    /// Entry with the lowest average turnaround time (first wins on ties).
    pub fn best_by_turnaround(&self) -> Option<&ComparisonEntry> {
        self.entries.iter().fold(None, |best, e| match best {
            Some(b) if b.avg_turnaround_time <= e.avg_turnaround_time => Some(b),
            _ => Some(e),
        })
    }
}

/// Runs every algorithm over the same input snapshot.
///
/// All schedulers are built (and their parameters validated) before any
/// of them runs.
pub fn compare(algorithms: &[Algorithm], processes: &[Process]) -> Result<Comparison> {
    let schedulers = algorithms
        .iter()
        .map(|a| a.build().map(|s| (a.label(), s)))
        .collect::<Result<Vec<_>>>()?;

    let mut comparison = Comparison::default();
    for (label, scheduler) in schedulers {
        let result = simulate(scheduler.as_ref(), processes)?;
        comparison.entries.push(ComparisonEntry {
            algorithm: label.to_string(),
            avg_waiting_time: result.metrics.avg_waiting_time,
            avg_turnaround_time: result.metrics.avg_turnaround_time,
            cpu_utilization: result.metrics.cpu_utilization,
        });
        comparison.results.push(result);
    }
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::scheduler::{FcfsScheduler, SjfMode};

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 2),
        ]
    }

    #[test]
    fn test_simulate_fcfs() {
        let result = simulate(&FcfsScheduler::new(), &sample()).unwrap();
        // completions 8, 12, 14 → turnaround 8, 11, 12 → waiting 0, 7, 10
        assert_eq!(result.metrics.makespan, 14);
        assert!((result.metrics.avg_waiting_time - 17.0 / 3.0).abs() < 1e-10);
        assert!((result.metrics.avg_turnaround_time - 31.0 / 3.0).abs() < 1e-10);
        assert!((result.metrics.cpu_utilization - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_simulate_empty() {
        let err = simulate(&FcfsScheduler::new(), &[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_simulate_rejects_overflowing_input() {
        let processes = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, 1)];
        for algo in [
            Algorithm::Fcfs,
            Algorithm::Sjf {
                mode: SjfMode::Global,
            },
            Algorithm::RoundRobin { quantum: 3 },
        ] {
            let scheduler = algo.build().unwrap();
            let err = simulate(scheduler.as_ref(), &processes).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_simulate_rejects_invalid_process() {
        let err = simulate(&FcfsScheduler::new(), &[Process::new(1, 0, 0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_compare_order_and_values() {
        let algorithms = [
            Algorithm::Fcfs,
            Algorithm::RoundRobin { quantum: 2 },
            Algorithm::Sjf {
                mode: SjfMode::Global,
            },
        ];
        let comparison = compare(&algorithms, &sample()).unwrap();

        let labels: Vec<_> = comparison.entries.iter().map(|e| e.algorithm.as_str()).collect();
        assert_eq!(labels, vec!["FCFS", "RR", "SJF"]);

        // SJF (global): P3 2-4 (CPU idles until it arrives), P2 4-8, P1 8-16
        let sjf = comparison.entry("SJF").unwrap();
        assert!((sjf.avg_turnaround_time - (2.0 + 7.0 + 16.0) / 3.0).abs() < 1e-10);
        assert!((sjf.avg_waiting_time - 11.0 / 3.0).abs() < 1e-10);
        assert!((sjf.cpu_utilization - 87.5).abs() < 1e-10);

        // RR q=2: P3 done at 6, P2 at 10, P1 at 14 → waiting 2, 5, 6
        let rr = comparison.entry("RR").unwrap();
        assert!((rr.avg_waiting_time - 13.0 / 3.0).abs() < 1e-10);

        assert_eq!(comparison.best_by_waiting().unwrap().algorithm, "SJF");
        assert_eq!(comparison.best_by_turnaround().unwrap().algorithm, "SJF");
        assert_eq!(comparison.results.len(), 3);
    }

    #[test]
    fn test_compare_validates_before_running() {
        let algorithms = [Algorithm::Fcfs, Algorithm::RoundRobin { quantum: -1 }];
        let err = compare(&algorithms, &sample()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_comparison_serializes_entries_only() {
        let comparison = compare(&[Algorithm::Fcfs], &sample()).unwrap();
        let json = serde_json::to_value(&comparison).unwrap();
        assert_eq!(json["entries"][0]["algorithm"], "FCFS");
        assert!(json.get("results").is_none());
    }
}
