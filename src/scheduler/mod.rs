//! CPU schedulers and metrics.
//!
//! Three classical single-CPU disciplines over a static process list:
//!
//! | Scheduler | Preemptive | Order |
//! |-----------|------------|-------|
//! | [`FcfsScheduler`] | no | arrival time, ties by input order |
//! | [`SjfScheduler`] | no | burst time, then arrival time |
//! | [`RoundRobinScheduler`] | yes (fixed quantum) | FIFO queue in input order |
//!
//! Every scheduler takes the process list by reference and works on its
//! own clone, so one input snapshot can be fed to any number of runs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod metrics;
mod round_robin;
mod simulation;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use metrics::ScheduleMetrics;
pub use round_robin::RoundRobinScheduler;
pub use simulation::{compare, simulate, Comparison, ComparisonEntry, SimulationResult};
pub use sjf::{SjfMode, SjfScheduler};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::models::{Process, Schedule};

/// A single-CPU scheduling discipline.
pub trait CpuScheduler: fmt::Debug {
    /// Short algorithm name (e.g. "FCFS").
    fn name(&self) -> &'static str;

    /// Runs the discipline to completion over a copy of `processes`.
    ///
    /// Total over validated input: every process ends up finished.
    fn run(&self, processes: &[Process]) -> Schedule;
}

/// Algorithm selector, as named on the command line or in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "algorithm")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf {
        #[serde(default)]
        mode: SjfMode,
    },
    /// Round-Robin with a fixed time quantum.
    RoundRobin { quantum: i64 },
}

impl Algorithm {
    /// Builds the scheduler, validating parameters.
    pub fn build(&self) -> Result<Box<dyn CpuScheduler>> {
        Ok(match *self {
            Algorithm::Fcfs => Box::new(FcfsScheduler::new()),
            Algorithm::Sjf { mode } => Box::new(SjfScheduler::with_mode(mode)),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(quantum)?),
        })
    }

    /// Short display name ("FCFS", "SJF", "RR").
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf { .. } => "SJF",
            Algorithm::RoundRobin { .. } => "RR",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "fcfs"),
            Algorithm::Sjf {
                mode: SjfMode::Global,
            } => write!(f, "sjf"),
            Algorithm::Sjf {
                mode: SjfMode::ArrivalGated,
            } => write!(f, "sjf-gated"),
            Algorithm::RoundRobin { quantum } => write!(f, "rr:{quantum}"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SchedError;

    /// Parses `fcfs`, `sjf`, `sjf-gated` or `rr:<quantum>` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf {
                mode: SjfMode::Global,
            }),
            "sjf-gated" => Ok(Algorithm::Sjf {
                mode: SjfMode::ArrivalGated,
            }),
            other => {
                let quantum = other
                    .strip_prefix("rr:")
                    .ok_or_else(|| SchedError::invalid_argument(format!("unknown algorithm: {s}")))?;
                let quantum: i64 = quantum.parse().map_err(|_| {
                    SchedError::invalid_argument(format!("invalid time quantum: {quantum}"))
                })?;
                Ok(Algorithm::RoundRobin { quantum })
            }
        }
    }
}
