//! Selection rules and rule engine for choosing the next process.
//!
//! Provides priority-based selection rules (SPT, FIFO) and a
//! composable rule engine for multi-criteria ordering. The FCFS and
//! SJF schedulers are both expressed as rule engines.
//!
//! # Usage
//!
//! ```
//! use sched_sim::dispatching::{RuleEngine, SchedulingContext};
//! use sched_sim::dispatching::rules;
//! use sched_sim::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let ready = vec![Process::new(1, 0, 8), Process::new(2, 1, 3)];
//! let context = SchedulingContext::at_time(0);
//! assert_eq!(engine.select_best(&ready, &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (selected first).
pub type RuleScore = i64;

/// A selection rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process given the current context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
