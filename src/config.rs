//! Simulation configuration.
//!
//! Settings come from an optional JSON file; command-line flags override
//! individual fields. Every field has a default, so `{}` is a valid file.
//!
//! ```json
//! {
//!   "input": "data.txt",
//!   "time_quantum": 4,
//!   "sjf_mode": "arrival_gated",
//!   "chart_width": 40
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::scheduler::{Algorithm, SjfMode};

/// Runtime settings for the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Process list file.
    pub input: PathBuf,
    /// Round-Robin quantum. `None` = ask interactively.
    pub time_quantum: Option<i64>,
    /// SJF candidate mode.
    pub sjf_mode: SjfMode,
    /// Width of the longest comparison bar, in characters.
    pub chart_width: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data.txt"),
            time_quantum: None,
            sjf_mode: SjfMode::Global,
            chart_width: 40,
        }
    }
}

impl SimulationConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    /// `InvalidArgument` for malformed JSON, unknown fields, or a
    /// non-positive `time_quantum`.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| SchedError::invalid_argument(format!("invalid configuration: {e}")))?;
        if let Some(q) = config.time_quantum.filter(|&q| q <= 0) {
            return Err(SchedError::invalid_argument(format!(
                "invalid configuration: time_quantum must be positive, got {q}"
            )));
        }
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Algorithms for a comparison run, in the order FCFS, RR, SJF.
    ///
    /// # Errors
    /// `InvalidArgument` if no time quantum is configured.
    pub fn comparison_algorithms(&self) -> Result<Vec<Algorithm>> {
        let quantum = self
            .time_quantum
            .ok_or_else(|| SchedError::invalid_argument("time quantum is not set"))?;
        Ok(vec![
            Algorithm::Fcfs,
            Algorithm::RoundRobin { quantum },
            Algorithm::Sjf {
                mode: self.sjf_mode,
            },
        ])
    }
}
